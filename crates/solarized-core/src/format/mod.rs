//! Visual Studio theme format versions.
//!
//! The 2015 and 2017 theme generators differ only in constant strings, so a
//! single [`ThemeFormat`] value carries everything version-specific: the
//! version label, and the display name and GUID stamped into each generated
//! theme. Default file names are derived from it.
//!
//! ## Example
//!
//! ```rust
//! use solarized_core::format::{FormatVersion, ThemeFormat};
//!
//! let format = FormatVersion::Vs2017.format();
//! assert_eq!(format.template_file_name(), "VSTheme.Template.2017.xml");
//! assert_eq!(format.dark.name, "Solarized 2017 (Dark)");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Placeholder written in place of the theme display name.
pub const THEME_NAME_PLACEHOLDER: &str = "$ThemeName";

/// Placeholder written in place of the theme GUID.
pub const GUID_PLACEHOLDER: &str = "$GUID";

/// File extension of Visual Studio theme files.
pub const THEME_EXTENSION: &str = "VSTheme";

const DARK_GUID: &str = "{4f4527a7-e5d3-4382-8ba0-126c0f0d3fe9}";
const LIGHT_GUID: &str = "{4d3b11ea-fd11-48f8-a8df-6911f7a5d892}";

/// Name and identifier written into a generated theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeIdentity {
    /// Display name (`Theme/@Name`)
    pub name: &'static str,
    /// Theme identifier (`Theme/@GUID`)
    pub guid: &'static str,
}

/// Version-specific constants for template extraction and theme synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeFormat {
    /// Version label used in default file names
    pub version: &'static str,
    /// Identity of the dark theme
    pub dark: ThemeIdentity,
    /// Identity of the light theme
    pub light: ThemeIdentity,
}

impl ThemeFormat {
    /// Visual Studio 2015 themes.
    pub const VS2015: Self = Self {
        version: "2015",
        dark: ThemeIdentity {
            name: "Solarized 2015 (Dark)",
            guid: DARK_GUID,
        },
        light: ThemeIdentity {
            name: "Solarized 2015 (Light)",
            guid: LIGHT_GUID,
        },
    };

    /// Visual Studio 2017 themes.
    pub const VS2017: Self = Self {
        version: "2017",
        dark: ThemeIdentity {
            name: "Solarized 2017 (Dark)",
            guid: DARK_GUID,
        },
        light: ThemeIdentity {
            name: "Solarized 2017 (Light)",
            guid: LIGHT_GUID,
        },
    };

    /// Default template file name, e.g. `VSTheme.Template.2017.xml`.
    #[must_use]
    pub fn template_file_name(&self) -> String {
        format!("{THEME_EXTENSION}.Template.{}.xml", self.version)
    }

    /// Default dark theme file name, e.g. `Solarized 2017 (Dark).VSTheme`.
    #[must_use]
    pub fn dark_theme_file_name(&self) -> String {
        format!("{}.{THEME_EXTENSION}", self.dark.name)
    }

    /// Default light theme file name, e.g. `Solarized 2017 (Light).VSTheme`.
    #[must_use]
    pub fn light_theme_file_name(&self) -> String {
        format!("{}.{THEME_EXTENSION}", self.light.name)
    }
}

impl Default for ThemeFormat {
    fn default() -> Self {
        Self::VS2017
    }
}

/// Supported theme format versions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatVersion {
    /// Visual Studio 2015
    #[serde(rename = "2015")]
    Vs2015,
    /// Visual Studio 2017
    #[default]
    #[serde(rename = "2017")]
    Vs2017,
}

impl FormatVersion {
    /// The constants for this version.
    #[must_use]
    pub const fn format(self) -> ThemeFormat {
        match self {
            Self::Vs2015 => ThemeFormat::VS2015,
            Self::Vs2017 => ThemeFormat::VS2017,
        }
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format().version)
    }
}

impl FromStr for FormatVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2015" => Ok(Self::Vs2015),
            "2017" => Ok(Self::Vs2017),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}
