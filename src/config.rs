use crate::error::{CivicError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".civic-eye.toml";

/// Environment variable consulted for the admin token; overrides `api.token`.
pub const TOKEN_ENV_VAR: &str = "CIVIC_EYE_TOKEN";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CivicConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Admin token for state-changing requests. Prefer CIVIC_EYE_TOKEN over
    /// storing this on disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            token: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_description")]
    pub default_description: String,
}

fn default_description() -> String {
    "Reported via civic-eye".to_string()
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            default_description: default_description(),
        }
    }
}

impl CivicConfig {
    /// Load configuration, searching upward from `start_path` and falling
    /// back to the per-user config directory.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        let content = std::fs::read_to_string(&config_path)?;
        let config: CivicConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok((config, config_path))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                break;
            }
        }

        // No project-local config; try the per-user location.
        if let Some(dirs) = directories::ProjectDirs::from("", "", "civic-eye") {
            let user_config = dirs.config_dir().join("config.toml");
            if user_config.exists() {
                return Ok(user_config);
            }
        }

        Err(CivicError::NotConfigured)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CivicError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api.base_url)
            .map_err(|e| CivicError::Config(format!("Invalid api.base_url: {}", e)))?;
        Ok(())
    }

    /// Admin token resolution: environment first, then the config file.
    pub fn admin_token(&self) -> Option<String> {
        std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|t| !t.is_empty())
            .or_else(|| self.api.token.clone())
    }
}
