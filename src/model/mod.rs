//! Data models for civic-eye.
//!
//! This module defines the core data structures:
//!
//! - [`Issue`]: A citizen-submitted issue report
//! - [`Location`]: A latitude/longitude pair
//! - [`IssueStatus`]: Workflow states (Pending, Resolved)
//! - [`Category`]: The fixed issue label set shared with the classifier

mod issue;
mod types;

pub use issue::{Issue, Location};
pub use types::{Category, IssueStatus};
