//! # Options Error Types
//!
//! Applying options cannot fail. Errors only come from loading options
//! presets out of configuration files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading options presets.
#[derive(Error, Debug)]
pub enum OptionsError {
    /// The configuration file was not found.
    #[error("Options config file not found: {path:?}")]
    ConfigFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The configuration file has an extension other than `.toml`.
    #[error("Unsupported options config format: {path:?}. Use .toml")]
    UnsupportedFormat {
        /// The path with the unsupported extension.
        path: PathBuf,
    },

    /// The configuration could not be parsed.
    #[error("Failed to parse options config {origin}: {details}")]
    ConfigParseError {
        /// Where the configuration came from (a path, or `<inline>`).
        origin: String,
        /// Details about the parse error.
        details: String,
    },

    /// No preset with the given name exists.
    #[error("No {kind} options preset named '{name}'")]
    PresetNotFound {
        /// The kind of preset that was looked up (`view` or `scroll`).
        kind: &'static str,
        /// The name that was looked up.
        name: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for options operations.
pub type OptionsResult<T> = Result<T, OptionsError>;

impl OptionsError {
    /// Create a config file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigFileNotFound { path: path.into() }
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    /// Create a parse error.
    pub fn parse_error(origin: impl Into<String>, details: impl Into<String>) -> Self {
        Self::ConfigParseError {
            origin: origin.into(),
            details: details.into(),
        }
    }

    /// Create a preset not found error.
    pub fn preset_not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Self::PresetNotFound {
            kind,
            name: name.into(),
        }
    }
}
