//! Error types for fieldtag
//!
//! Tag parsing itself never fails. These errors come from the configuration
//! and command-line layers.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fieldtag
#[derive(Debug, Error)]
pub enum FieldTagError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Option not found: {0}")]
    OptionNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl FieldTagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FieldTagError::Config(_) | FieldTagError::ConfigNotFound(_) => 2,
            FieldTagError::OptionNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FieldTagError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to --config\n\
                    • Unset FIELDTAG_CONFIG to use the built-in defaults",
                    path.display()
                )
            }
            FieldTagError::OptionNotFound(name) => {
                format!(
                    "No option named '{}' in tag\n\n\
                    Suggestions:\n\
                    • Option names are lower-cased when parsed (e.g., 'OmitEmpty=1' becomes 'omitempty')\n\
                    • Bare words without '=' are keys, check them with 'fieldtag has-key'",
                    name
                )
            }
            FieldTagError::Config(msg) => {
                if msg.contains("format") {
                    format!(
                        "{}\n\n\
                        Valid formats: text, toml\n\
                        Example: fieldtag --format toml parse 'key1,opt=val'",
                        msg
                    )
                } else if msg.contains("tag_name") {
                    format!(
                        "{}\n\n\
                        Example config:\n\
                        tag_name = \"json\"",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using FieldTagError
pub type Result<T> = std::result::Result<T, FieldTagError>;
