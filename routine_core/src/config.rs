//! Configuration file support.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/routine/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub schedule: ScheduleConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl DataConfig {
    /// Session log location inside `data_dir`
    pub fn session_log_path(data_dir: &Path) -> PathBuf {
        data_dir.join("sessions.jsonl")
    }
}

/// Schedule walking parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Days shown when no explicit count is given
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,

    /// Most `next_day` links followed from the first day before the chain
    /// is treated as broken. The link that closes a cycle counts too.
    #[serde(default = "default_max_chain_hops")]
    pub max_chain_hops: usize,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon_days(),
            max_chain_hops: default_max_chain_hops(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("routine")
}

fn default_horizon_days() -> u32 {
    14
}

fn default_max_chain_hops() -> usize {
    64
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("routine")
            .join("config.toml")
    }

    /// Reject values the schedule walk cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.schedule.max_chain_hops == 0 {
            return Err(Error::Config("schedule.max_chain_hops must be at least 1".into()));
        }
        Ok(())
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.schedule.horizon_days, 14);
        assert_eq!(config.schedule.max_chain_hops, 64);
        assert!(config.data.data_dir.ends_with("routine"));
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[schedule]
horizon_days = 28
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.schedule.horizon_days, 28);
        assert_eq!(config.schedule.max_chain_hops, 64); // default
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("cfg").join("config.toml");

        let mut config = Config::default();
        config.data.data_dir = PathBuf::from("/tmp/routine-data");
        config.schedule.max_chain_hops = 12;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.data.data_dir, PathBuf::from("/tmp/routine-data"));
        assert_eq!(loaded.schedule.max_chain_hops, 12);
    }

    #[test]
    fn test_zero_hops_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[schedule]\nmax_chain_hops = 0\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_session_log_path() {
        let path = DataConfig::session_log_path(Path::new("/data"));
        assert_eq!(path, PathBuf::from("/data/sessions.jsonl"));
    }
}
