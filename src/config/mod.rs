use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration: where the timesheet lives and how its dates are
/// written. The file is YAML; a missing file falls back to defaults.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub input_file: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: Self::default_input_file().to_string_lossy().to_string(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Standard configuration directory, under the user's home.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".punchcard")
    }

    /// Full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchcard.conf")
    }

    /// Default timesheet location when none is configured
    pub fn default_input_file() -> PathBuf {
        Self::config_dir().join("timesheet.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
        } else {
            Ok(Self::default())
        }
    }
}
