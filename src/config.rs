use crate::error::{Result, SiftError};
use crate::ranking::DEFAULT_LIMIT;
use crate::scorer::ScoreOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoreOptions,
    /// How many ranked candidates to show
    pub limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scoring: ScoreOptions::default(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(SiftError::Config("limit must be at least 1".to_string()));
        }
        if !self.scoring.separators.contains(&self.scoring.path_separator) {
            log::warn!(
                "path separator {:?} is not in the separator set",
                self.scoring.path_separator
            );
        }
        Ok(())
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Config manager for the default location: ~/.sift/config.json
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or(SiftError::Config("Could not determine home directory".to_string()))?;
        Ok(ConfigManager {
            path: home.join(".sift").join("config.json"),
        })
    }

    /// Config manager for an explicit file
    pub fn at(path: impl Into<PathBuf>) -> Self {
        ConfigManager { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the config, falling back to defaults when the file is absent
    pub fn load(&self) -> Result<Config> {
        if !self.exists() {
            log::debug!("no config at {}, using defaults", self.path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        log::info!("loaded config from {}", self.path.display());
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
