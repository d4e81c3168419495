mod cli;
mod commands;
mod tui;

use cli::{Cli, Commands};
use sift::config::{Config, ConfigManager};
use sift::error::Result;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::builder().format_timestamp_nanos().init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config_manager = ConfigManager::new()?;
    let config = apply_overrides(config_manager.load()?, &cli)?;

    match cli.command {
        None => {
            commands::run_tui(cli.file.as_deref(), &config).await?;
        }
        Some(Commands::Tui { file }) => {
            commands::run_tui(file.as_deref().or(cli.file.as_deref()), &config).await?;
        }
        Some(Commands::Filter { query, file, json }) => {
            commands::run_filter(&query, file.as_deref(), json, &config).await?;
        }
        Some(Commands::Score {
            text,
            pattern,
            json,
        }) => {
            commands::run_score(&text, &pattern, json, &config).await?;
        }
        Some(Commands::Config { init }) => {
            commands::run_config(&config_manager, &config, init).await?;
        }
    }

    Ok(())
}

/// Command line flags win over the config file
fn apply_overrides(mut config: Config, cli: &Cli) -> Result<Config> {
    if cli.case_sensitive {
        config.scoring.case_sensitive = true;
    }
    if let Some(limit) = cli.limit {
        config.limit = limit;
    }
    config.validate()?;
    Ok(config)
}
