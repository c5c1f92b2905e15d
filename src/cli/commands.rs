use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "civic-eye")]
#[command(
    author,
    version,
    about = "A CLI client for the Civic-Eye civic-issue reporting service"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .civic-eye.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write structured logs to this file (daily rotation)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a .civic-eye.toml config in the current directory
    Init {
        /// Base URL of the Civic-Eye service
        #[arg(long, default_value = "http://localhost:5000")]
        api_url: String,
    },

    /// Submit a geotagged photo report
    #[command(visible_alias = "r")]
    Report {
        /// Path to the photo
        image: PathBuf,

        /// Latitude of the issue
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude of the issue
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,

        /// Issue category (omit to ask the classifier for a suggestion)
        #[arg(short, long, value_enum)]
        category: Option<CategoryArg>,

        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,

        /// Skip the classifier round-trip
        #[arg(long)]
        no_classify: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask the classifier for a category suggestion only
    Predict {
        /// Path to the photo
        image: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List reported issues
    #[command(visible_alias = "ls")]
    List {
        /// Filter by status
        #[arg(short, long, value_enum)]
        status: Option<StatusArg>,

        /// Filter by category
        #[arg(short, long, value_enum)]
        category: Option<CategoryArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one issue's details
    Show {
        /// Issue ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute overlap-free map marker positions
    Map {
        /// Include resolved issues (the map hides them by default)
        #[arg(long)]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pending/resolved counts
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark an issue as resolved (requires admin token)
    Resolve {
        /// Issue ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reopen a resolved issue (requires admin token)
    Reopen {
        /// Issue ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Pending,
    Resolved,
}

impl From<StatusArg> for crate::model::IssueStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pending => crate::model::IssueStatus::Pending,
            StatusArg::Resolved => crate::model::IssueStatus::Resolved,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Pothole,
    Garbage,
    BrokenStreetlight,
    Normal,
    Other,
}

impl From<CategoryArg> for crate::model::Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Pothole => crate::model::Category::Pothole,
            CategoryArg::Garbage => crate::model::Category::Garbage,
            CategoryArg::BrokenStreetlight => crate::model::Category::BrokenStreetlight,
            CategoryArg::Normal => crate::model::Category::Normal,
            CategoryArg::Other => crate::model::Category::Other,
        }
    }
}
