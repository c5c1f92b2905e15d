mod init;
mod list;
mod map;
mod predict;
mod report;
mod show;
mod stats;
mod status;
mod utils;

pub use init::handle_init;
pub use list::{ListParams, handle_list};
pub use map::handle_map;
pub use predict::handle_predict;
pub use report::{ReportParams, handle_report};
pub use show::handle_show;
pub use stats::handle_stats;
pub use status::{handle_reopen, handle_resolve};

use crate::api::ApiClient;
use crate::config::CivicConfig;
use crate::error::Result;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: CivicConfig,
    pub client: ApiClient,
}

impl CommandContext {
    pub fn new(config: CivicConfig) -> Result<Self> {
        let client = ApiClient::new(&config)?;
        Ok(Self { config, client })
    }
}
