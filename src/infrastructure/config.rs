//! Configuration management

use crate::error::{FieldTagError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable pointing at a config file
pub const CONFIG_ENV: &str = "FIELDTAG_CONFIG";

/// Tag name used by `field` when neither the CLI nor the config names one
pub const DEFAULT_TAG_NAME: &str = "tag";

/// How parsed tags are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable keys/options listing
    #[default]
    Text,
    /// The tag serialized as a TOML document
    Toml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "toml" => Ok(OutputFormat::Toml),
            _ => Err(format!("Invalid format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tag_name: String,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tag_name: DEFAULT_TAG_NAME.to_string(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FieldTagError::ConfigNotFound(path.to_path_buf())
            } else {
                FieldTagError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            FieldTagError::Config(format!(
                "Failed to parse {}: {}",
                path.display(),
                e.message()
            ))
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Resolve the active config.
    ///
    /// An explicit path wins, then `FIELDTAG_CONFIG`, then built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => Self::load_from_file(&PathBuf::from(path)),
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Config::default())
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.tag_name.is_empty() {
            return Err(FieldTagError::Config(
                "tag_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
