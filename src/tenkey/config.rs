use crate::error::{Result, TenkeyError};
use crate::generator::{DEFAULT_YEAR_MAX, DEFAULT_YEAR_MIN};
use crate::history::DEFAULT_HISTORY_LIMIT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: [&str; 4] = ["area-codes", "year-min", "year-max", "history-limit"];

/// Configuration for tenkey, stored in `config.json` inside the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct TenkeyConfig {
    /// Area-code JSON to load instead of `./area-codes.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_codes: Option<PathBuf>,

    #[serde(default = "default_year_min")]
    pub year_min: i32,

    #[serde(default = "default_year_max")]
    pub year_max: i32,

    /// Number of completed entries kept in the log
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_year_min() -> i32 {
    DEFAULT_YEAR_MIN
}

fn default_year_max() -> i32 {
    DEFAULT_YEAR_MAX
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for TenkeyConfig {
    fn default() -> Self {
        Self {
            area_codes: None,
            year_min: DEFAULT_YEAR_MIN,
            year_max: DEFAULT_YEAR_MAX,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl TenkeyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TenkeyConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Like [`TenkeyConfig::load`], but an unreadable file gives the defaults.
    ///
    /// Values that don't pass validation are kept (the generator and the history cope
    /// with them) and only reported, so `config <key> <value>` can still repair them.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        match Self::load(&config_dir) {
            Ok(config) => {
                if let Err(e) = config.validate() {
                    tracing::warn!(error = %e, "config has inconsistent values");
                }
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable config, using defaults");
                Self::default()
            }
        }
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "area-codes" => Some(
                self.area_codes
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "year-min" => Some(self.year_min.to_string()),
            "year-max" => Some(self.year_max.to_string()),
            "history-limit" => Some(self.history_limit.to_string()),
            _ => None,
        }
    }

    /// Sets a key from its string form. An empty `area-codes` value unsets it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        match key {
            "area-codes" => {
                let value = value.trim();
                updated.area_codes = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "year-min" => updated.year_min = parse_number(key, value)?,
            "year-max" => updated.year_max = parse_number(key, value)?,
            "history-limit" => updated.history_limit = parse_number(key, value)?,
            _ => return Err(TenkeyError::Config(format!("Unknown config key: {}", key))),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.year_min > self.year_max {
            return Err(TenkeyError::Config(format!(
                "year-min ({}) is after year-max ({})",
                self.year_min, self.year_max
            )));
        }
        if self.history_limit == 0 {
            return Err(TenkeyError::Config(
                "history-limit must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| TenkeyError::Config(format!("Invalid value for {}: {}", key, value)))
}
