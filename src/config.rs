use crate::model::DEFAULT_WINDOW_DAYS;
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub birthdays: BirthdayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct StorageConfig {
    /// Overrides the default `~/.assistant-bot/addressbook.json`
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BirthdayConfig {
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for BirthdayConfig {
    fn default() -> Self {
        Self { window_days: default_window_days() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

impl Config {
    /// Load from `explicit` if given, otherwise from the per-user config
    /// directory. A missing default file is created; a missing explicit file
    /// is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        log::debug!("Loading config (explicit path: {:?})", explicit);
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("Config file {} does not exist", path.display());
            }
            return Self::load_from(path);
        }

        let config_path = get_config_path()?;
        if !config_path.exists() {
            log::info!("Writing default config to {}", config_path.display());
            let default_config = Config::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "assistant-bot", "assistant-bot")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}
