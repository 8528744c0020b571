use crate::core::policy::{ClockPolicy, SessionPolicy, SkewPolicy};
use crate::errors::AppResult;
use crate::ui::messages::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

pub const CONFIG_DIR_ENV: &str = "RTIMECLOCK_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Employee used when `--employee` is not given.
    #[serde(default)]
    pub employee: Option<String>,
    #[serde(default)]
    pub session_policy: SessionPolicy,
    #[serde(default)]
    pub clock_skew: SkewPolicy,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_recent_limit() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            employee: None,
            session_policy: SessionPolicy::default(),
            clock_skew: SkewPolicy::default(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Config {
    /// `$RTIMECLOCK_HOME` when set, otherwise `~/.rtimeclock`.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
            && !dir.is_empty()
        {
            return PathBuf::from(dir);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtimeclock")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimeclock.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimeclock.sqlite")
    }

    pub fn policy(&self) -> ClockPolicy {
        ClockPolicy {
            session: self.session_policy,
            skew: self.clock_skew,
        }
    }

    /// Load the configuration file, or defaults when it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Create the configuration directory and, unless `write_config` is
    /// false, a configuration file pointing at `db_path`. An existing file
    /// is left untouched; the returned config still targets `db_path`.
    pub fn init_all(db_path: &str, write_config: bool) -> AppResult<Config> {
        fs::create_dir_all(Self::config_dir())?;

        let path = Self::config_file();
        if path.exists() {
            if write_config {
                info(format!(
                    "Configuration file already exists, keeping it: {}",
                    path.display()
                ));
            }
            return Ok(Config {
                database: db_path.to_string(),
                ..Self::load_from(&path)?
            });
        }

        let config = Config {
            database: db_path.to_string(),
            ..Config::default()
        };

        if write_config {
            config.save_to(&path)?;
        }

        Ok(config)
    }
}
