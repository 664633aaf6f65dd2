//! Error types for Solarized.
//!
//! This module provides a unified error type for all template and theme
//! operations. Values that merely fail to look like a color are not errors:
//! the transforms pass them through unchanged.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized `Result` type for Solarized operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Solarized.
#[derive(Error, Debug)]
pub enum Error {
    /// A required input document does not exist
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input document is not well-formed XML
    #[error("malformed XML: {0}")]
    Parse(#[from] quick_xml::Error),

    /// Unrecognised theme format version
    #[error("unknown theme format '{0}', expected 2015 or 2017")]
    UnknownFormat(String),

    /// Configuration file error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Invalid configuration value
    #[error("invalid configuration value for '{key}': {reason}")]
    InvalidConfig {
        /// Configuration key
        key: String,
        /// Reason for invalidity
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Self::Parse(err.into())
    }
}

impl Error {
    /// Returns whether this error was caused by the input document rather
    /// than by the environment.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Parse(_))
    }

    /// Returns a helpful suggestion for resolving the error, if applicable.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::NotFound(_) => Some(
                "Check the path, or pass it explicitly:\n\
                   solarized -t <template.xml>            (generate themes)\n\
                   solarized -c -d <theme.vstheme>        (create a template)",
            ),
            Self::Parse(_) => Some("The document must be well-formed XML; check for unbalanced tags."),
            Self::UnknownFormat(_) => Some("Use --format 2015 or --format 2017."),
            Self::ConfigError(_) | Self::InvalidConfig { .. } => {
                Some("Fix or remove the configuration file, or pass --config <path>.")
            }
            Self::Io(_) => None,
        }
    }
}
