//! # Solarized Core Library
//!
//! `solarized-core` converts between concrete Visual Studio color themes and
//! reusable theme templates bound to the Solarized palette.
//!
//! ## Features
//!
//! - **Template extraction**: literal `AARRGGBB` colors become references to
//!   the nearest Solarized role or accent
//! - **Theme synthesis**: one template produces a dark and a light theme in a
//!   single streaming pass
//! - **Lossless copy**: whitespace, comments and element order survive both
//!   directions
//! - **Console colors**: the same schemes exported as a console color table
//!
//! ## Modules
//!
//! - [`color`] - ARGB color values and RGB distance
//! - [`palette`] - The sixteen Solarized colors
//! - [`scheme`] - Dark and light color schemes and nearest-color matching
//! - [`format`] - Theme format versions (names, GUIDs, default file names)
//! - [`template`] - Streaming extraction and synthesis
//! - [`generator`] - File-level generation with atomic output
//! - [`console`] - Console color table export
//! - [`config`] - Configuration management
//!
//! ## Example
//!
//! ```rust,ignore
//! use solarized_core::format::ThemeFormat;
//! use solarized_core::generator;
//! use solarized_core::scheme::ColorScheme;
//!
//! // Turn an existing dark theme into a template
//! generator::write_template(
//!     "Solarized 2017 (Dark).VSTheme".as_ref(),
//!     "VSTheme.Template.2017.xml".as_ref(),
//!     &ColorScheme::DARK,
//! )?;
//!
//! // Regenerate both themes from it
//! let format = ThemeFormat::VS2017;
//! generator::write_themes(
//!     "VSTheme.Template.2017.xml".as_ref(),
//!     format.dark_theme_file_name().as_ref(),
//!     format.light_theme_file_name().as_ref(),
//!     &format,
//! )?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_lossless)]

pub mod color;
pub mod config;
pub mod console;
pub mod error;
pub mod format;
pub mod generator;
pub mod palette;
pub mod scheme;
pub mod template;

pub use color::Color;
pub use error::{Error, Result};
pub use format::{FormatVersion, ThemeFormat};
pub use scheme::{nearest_color, ColorScheme, SchemeVariant, Tone};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
