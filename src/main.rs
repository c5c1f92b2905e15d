use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use civic_eye::cli::handlers::{
    self, CommandContext, ListParams, ReportParams,
};
use civic_eye::cli::{Cli, Commands};
use civic_eye::config::CivicConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    civic_eye::logging::init(cli.verbose, cli.log_file.clone());

    // reqwest is built with rustls-no-provider; install the ring provider
    // once before any TLS connection is attempted.
    let _ = rustls::crypto::ring::default_provider().install_default();

    match cli.command {
        Commands::Init { api_url } => handlers::handle_init(api_url),
        Commands::Report {
            image,
            lat,
            lng,
            category,
            description,
            no_classify,
            json,
        } => {
            let ctx = load_context(cli.config)?;
            handlers::handle_report(
                &ctx,
                ReportParams {
                    image,
                    lat,
                    lng,
                    category,
                    description,
                    no_classify,
                    json,
                },
            )
        }
        Commands::Predict { image, json } => {
            let ctx = load_context(cli.config)?;
            handlers::handle_predict(&ctx, image, json)
        }
        Commands::List {
            status,
            category,
            json,
        } => {
            let ctx = load_context(cli.config)?;
            handlers::handle_list(
                &ctx,
                ListParams {
                    status,
                    category,
                    json,
                },
            )
        }
        Commands::Show { id, json } => {
            let ctx = load_context(cli.config)?;
            handlers::handle_show(&ctx, id, json)
        }
        Commands::Map { all, json } => {
            let ctx = load_context(cli.config)?;
            handlers::handle_map(&ctx, all, json)
        }
        Commands::Stats { json } => {
            let ctx = load_context(cli.config)?;
            handlers::handle_stats(&ctx, json)
        }
        Commands::Resolve { id, json } => {
            let ctx = load_context(cli.config)?;
            handlers::handle_resolve(&ctx, id, json)
        }
        Commands::Reopen { id, json } => {
            let ctx = load_context(cli.config)?;
            handlers::handle_reopen(&ctx, id, json)
        }
    }
}

fn load_context(config_override: Option<PathBuf>) -> Result<CommandContext> {
    let config = match config_override {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => {
            let cwd = std::env::current_dir()?;
            let (config, _path) = CivicConfig::load(&cwd)
                .context("Failed to load civic-eye configuration")?;
            config
        }
    };

    Ok(CommandContext::new(config)?)
}
