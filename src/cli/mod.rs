//! Command-line interface: clap command definitions and per-command
//! handlers.

pub mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
