//! Rule configuration
//!
//! Parameters for the bundled rule sets, read from TOML.
//! The default location is `~/.config/spec/rules.toml` (XDG standard);
//! a missing file means built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory under the user config dir
pub const CONFIG_DIR: &str = "spec";

/// Config filename
pub const CONFIG_FILE: &str = "rules.toml";

/// Errors loading a rules file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not valid rules TOML
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

/// All rule set parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Vampire rule set
    #[serde(default)]
    pub vampire: VampireRules,
    /// Scholar rule set
    #[serde(default)]
    pub scholar: ScholarRules,
}

/// Parameters of the vampire rule set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VampireRules {
    /// Minimum age, inclusive
    #[serde(default = "default_ancient_age")]
    pub min_age: u32,
    /// Meals a vampire may eat
    #[serde(default = "default_diet")]
    pub diet: Vec<String>,
}

fn default_ancient_age() -> u32 {
    500
}

fn default_diet() -> Vec<String> {
    vec!["blood".to_string()]
}

impl Default for VampireRules {
    fn default() -> Self {
        Self {
            min_age: default_ancient_age(),
            diet: default_diet(),
        }
    }
}

/// Parameters of the scholar rule set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScholarRules {
    /// Age the subject must exceed
    #[serde(default = "default_older_than")]
    pub older_than: u32,
    /// Required name
    #[serde(default = "default_name")]
    pub name: String,
    /// Required birth year
    #[serde(default = "default_birth_year")]
    pub birth_year: i32,
}

fn default_older_than() -> u32 {
    20
}

fn default_name() -> String {
    "Newton".to_string()
}

fn default_birth_year() -> i32 {
    1643
}

impl Default for ScholarRules {
    fn default() -> Self {
        Self {
            older_than: default_older_than(),
            name: default_name(),
            birth_year: default_birth_year(),
        }
    }
}

impl RulesConfig {
    /// Default config file path, if the platform has a config dir
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load rules
    ///
    /// An explicit path must exist. Without one, the default path is used if
    /// present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                log::debug!("no rules file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Read and parse a rules file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded rules from {}", path.display());
        Ok(config)
    }
}
