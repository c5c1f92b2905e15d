use crate::config::{ApiSettings, CivicConfig, CONFIG_FILE_NAME};
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(api_url: String) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        anyhow::bail!("Already configured at {}", config_path.display());
    }

    let config = CivicConfig {
        api: ApiSettings {
            base_url: api_url.trim_end_matches('/').to_string(),
            ..ApiSettings::default()
        },
        ..CivicConfig::default()
    };
    config.save(&config_path)?;

    println!(
        "{} civic-eye in {}",
        "Configured".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!("  API:    {}", config.api.base_url);

    Ok(())
}
