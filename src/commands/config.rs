use sift::config::{Config, ConfigManager};
use sift::error::Result;

pub async fn run_config(config_manager: &ConfigManager, config: &Config, init: bool) -> Result<()> {
    if init {
        if config_manager.exists() {
            println!("Config already exists at {}", config_manager.path().display());
        } else {
            config_manager.save(&Config::default())?;
            println!("✓ Wrote default config to {}", config_manager.path().display());
        }
        return Ok(());
    }

    let origin = if config_manager.exists() {
        "loaded"
    } else {
        "not found, using defaults"
    };
    println!("Config path: {} ({})\n", config_manager.path().display(), origin);
    println!("{}", serde_json::to_string_pretty(config)?);

    Ok(())
}
