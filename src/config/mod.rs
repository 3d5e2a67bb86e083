use crate::errors::{AppError, AppResult};
use crate::ledger::{DEFAULT_SNAPSHOT_KEY, PersistPolicy};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Directory holding the snapshot blob(s).
    #[serde(default = "default_store_dir")]
    pub store_dir: String,
    #[serde(default = "default_snapshot_key")]
    pub snapshot_key: String,
    /// Actor used by `in` / `out` when none is given on the command line.
    #[serde(default)]
    pub default_actor: Option<String>,
    /// chrono format string for the timestamp captured at punch time.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_persist_retries")]
    pub persist_retries: u32,
    #[serde(default = "default_persist_backoff_ms")]
    pub persist_backoff_ms: u64,
}

fn default_store_dir() -> String {
    Config::config_dir()
        .join("store")
        .to_string_lossy()
        .to_string()
}
fn default_snapshot_key() -> String {
    DEFAULT_SNAPSHOT_KEY.to_string()
}
fn default_timestamp_format() -> String {
    "%d/%m/%Y, %H:%M:%S".to_string()
}
fn default_persist_retries() -> u32 {
    3
}
fn default_persist_backoff_ms() -> u64 {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            snapshot_key: default_snapshot_key(),
            default_actor: None,
            timestamp_format: default_timestamp_format(),
            persist_retries: default_persist_retries(),
            persist_backoff_ms: default_persist_backoff_ms(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rpunchclock`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rpunchclock")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpunchclock.conf")
    }

    /// Load configuration from the standard file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // An empty file deserializes to unit, not to an empty mapping.
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))
    }

    /// Write this configuration to the standard file, creating the directory.
    pub fn save(&self) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, self.to_yaml()?)?;
        Ok(path)
    }

    /// Snapshot directory with `~/` expanded.
    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store_dir)
    }

    pub fn persist_policy(&self) -> PersistPolicy {
        PersistPolicy::new(self.persist_retries, self.persist_backoff_ms)
    }

    /// Configured default actor, ignoring blank values.
    pub fn default_actor(&self) -> Option<&str> {
        self.default_actor
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}
