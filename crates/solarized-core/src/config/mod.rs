//! Configuration management for Solarized.
//!
//! This module handles loading, saving, and resolving Solarized configuration.
//!
//! ## Configuration File Locations
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.config/solarized/config.toml` |
//! | macOS | `~/Library/Application Support/com.solarized.Solarized/config.toml` |
//! | Windows | `%APPDATA%\solarized\Solarized\config\config.toml` |
//!
//! ## Example
//!
//! ```rust,ignore
//! use solarized_core::config::Config;
//!
//! let config = Config::load()?;
//! println!("Template: {}", config.template_path().display());
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::format::{FormatVersion, ThemeFormat};
use crate::scheme::SchemeVariant;

/// Main configuration struct for Solarized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// File locations
    pub paths: PathsConfig,
    /// Console color table settings
    pub console: ConsoleConfig,
}

/// General configuration options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Theme format version used for default names and theme identities
    pub format: FormatVersion,
}

/// Path overrides. Unset paths fall back to the format's default file names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Template document
    pub template: Option<PathBuf>,
    /// Dark theme document
    pub dark_theme: Option<PathBuf>,
    /// Light theme document
    pub light_theme: Option<PathBuf>,
    /// Directory that relative paths are resolved against
    pub output_dir: Option<PathBuf>,
}

/// Console color table configuration options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Scheme exported to the console color table
    pub variant: SchemeVariant,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// If the configuration file doesn't exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or defaults if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("Failed to read config: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to `path`, creating its directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::ConfigError(format!("Failed to create config directory: {e}"))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| Error::ConfigError(format!("Failed to write config: {e}")))
    }

    /// Reject values that would make every generated path unusable.
    fn validate(&self) -> Result<()> {
        let paths = [
            ("paths.template", &self.paths.template),
            ("paths.dark_theme", &self.paths.dark_theme),
            ("paths.light_theme", &self.paths.light_theme),
            ("paths.output_dir", &self.paths.output_dir),
        ];
        for (key, path) in paths {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                return Err(Error::InvalidConfig {
                    key: key.to_string(),
                    reason: "path must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// The theme format selected by `general.format`.
    #[must_use]
    pub const fn format(&self) -> ThemeFormat {
        self.general.format.format()
    }

    /// Template path: the configured one, or the format's default name.
    #[must_use]
    pub fn template_path(&self) -> PathBuf {
        self.resolve(
            self.paths.template.as_deref(),
            self.format().template_file_name(),
        )
    }

    /// Dark theme path: the configured one, or the format's default name.
    #[must_use]
    pub fn dark_theme_path(&self) -> PathBuf {
        self.resolve(
            self.paths.dark_theme.as_deref(),
            self.format().dark_theme_file_name(),
        )
    }

    /// Light theme path: the configured one, or the format's default name.
    #[must_use]
    pub fn light_theme_path(&self) -> PathBuf {
        self.resolve(
            self.paths.light_theme.as_deref(),
            self.format().light_theme_file_name(),
        )
    }

    fn resolve(&self, configured: Option<&Path>, default_name: String) -> PathBuf {
        let path = configured.map_or_else(|| PathBuf::from(default_name), Path::to_path_buf);
        match &self.paths.output_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        }
    }

    /// Get the default configuration directory path.
    #[must_use]
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "solarized", "Solarized")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the full path to the configuration file.
    #[must_use]
    pub fn config_path() -> PathBuf {
        Self::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }
}
