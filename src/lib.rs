//! # civic-eye - CLI client for the Civic-Eye issue reporting service
//!
//! Civic-eye lets citizens submit geotagged photo reports of civic problems
//! (potholes, garbage, broken streetlights) from the terminal, and lets
//! administrators list, inspect, and resolve them. The issue store and the
//! image classifier are remote services; this crate is the client.
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the CLI at a service
//! civic-eye init --api-url http://localhost:5000
//!
//! # Submit a report (category suggested by the classifier)
//! civic-eye report pothole.jpg --lat 28.6139 --lng 77.2090
//!
//! # Admin: list, place map markers, resolve
//! civic-eye list --status pending
//! civic-eye map
//! CIVIC_EYE_TOKEN=... civic-eye resolve <id>
//! ```
//!
//! ## Modules
//!
//! - [`api`]: HTTP client for the issue store and classifier endpoints
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`map`]: Marker placement (overlap-free display positions)
//! - [`model`]: Data models (Issue, Location, Category, IssueStatus)
//! - [`validation`]: Submission-side input validation

/// HTTP client for the remote issue store and classifier.
pub mod api;

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.civic-eye.toml` configuration files and their discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `CivicError` enum and `Result<T>` type alias.
pub mod error;

/// Marker placement for map display.
///
/// Derives overlap-free display positions from stored coordinates.
pub mod map;

/// Data models for issues, locations, categories, and statuses.
pub mod model;

/// Input validation at the submission boundary.
pub mod validation;

pub mod logging;
