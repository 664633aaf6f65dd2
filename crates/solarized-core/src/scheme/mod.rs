//! Dark and light Solarized color schemes.
//!
//! A [`ColorScheme`] is an immutable, ordered mapping from role or accent
//! name to color. Every scheme holds the same sixteen names in the same
//! order: the eight accents first, then the eight [`Tone`] roles. Only the
//! colors bound to the tone roles differ between [`ColorScheme::DARK`] and
//! [`ColorScheme::LIGHT`].
//!
//! The nearest-color lookup lives in [`nearest`] and works on any scheme.

pub mod nearest;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::palette::{self, ACCENTS, TONES};

pub use nearest::{nearest_color, NearestMatch};

/// Number of tone roles in a scheme.
pub const TONE_COUNT: usize = 8;

/// Number of entries in every scheme.
pub const ENTRY_COUNT: usize = ACCENTS.len() + TONE_COUNT;

/// Semantic tone roles whose colors flip between dark and light schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Main background
    BackgroundDefault,
    /// Background of highlighted regions
    BackgroundHighlight,
    /// Comments and other de-emphasized content
    SecondaryContent,
    /// Between secondary and primary content
    MiddleGray,
    /// Body text
    PrimaryContent,
    /// Emphasized content
    EmphasizedContent,
    /// First highlight tone
    Highlight1,
    /// Second highlight tone
    Highlight2,
}

impl Tone {
    /// All tone roles in scheme order.
    pub const ALL: [Self; TONE_COUNT] = [
        Self::BackgroundDefault,
        Self::BackgroundHighlight,
        Self::SecondaryContent,
        Self::MiddleGray,
        Self::PrimaryContent,
        Self::EmphasizedContent,
        Self::Highlight1,
        Self::Highlight2,
    ];

    /// The name used for this role in templates.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BackgroundDefault => "BackgroundDefault",
            Self::BackgroundHighlight => "BackgroundHighlight",
            Self::SecondaryContent => "SecondaryContent",
            Self::MiddleGray => "MiddleGray",
            Self::PrimaryContent => "PrimaryContent",
            Self::EmphasizedContent => "EmphasizedContent",
            Self::Highlight1 => "Highlight1",
            Self::Highlight2 => "Highlight2",
        }
    }

    /// Look up a tone role by its template name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tone| tone.as_str() == name)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered, immutable mapping from role or accent name to color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    name: &'static str,
    entries: [(&'static str, Color); ENTRY_COUNT],
}

impl ColorScheme {
    /// The dark scheme: tone roles bound from the darkest palette tone up.
    pub const DARK: Self = Self::new("Dark", TONES);

    /// The light scheme: the dark binding reversed along the tone ramp.
    pub const LIGHT: Self = Self::new(
        "Light",
        [
            palette::BASE3,
            palette::BASE2,
            palette::BASE1,
            palette::BASE0,
            palette::BASE00,
            palette::BASE01,
            palette::BASE02,
            palette::BASE03,
        ],
    );

    /// Build a scheme from a tone binding given in [`Tone::ALL`] order.
    ///
    /// The accents are always the palette accents.
    #[must_use]
    pub const fn new(name: &'static str, tones: [Color; TONE_COUNT]) -> Self {
        let mut entries = [("", Color::new(0, 0, 0, 0)); ENTRY_COUNT];

        let mut i = 0;
        while i < ACCENTS.len() {
            entries[i] = ACCENTS[i];
            i += 1;
        }

        let mut t = 0;
        while t < TONE_COUNT {
            entries[ACCENTS.len() + t] = (Tone::ALL[t].as_str(), tones[t]);
            t += 1;
        }

        Self { name, entries }
    }

    /// Display name of the scheme.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of entries (always [`ENTRY_COUNT`]).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; schemes are never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Color bound to a role or accent name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Color> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, color)| *color)
    }

    /// Whether the scheme has an entry with this name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Color bound to a tone role.
    #[must_use]
    pub const fn tone(&self, tone: Tone) -> Color {
        self.entries[ACCENTS.len() + tone as usize].1
    }

    /// Entries in scheme order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Color)> + '_ {
        self.entries.iter().copied()
    }

    /// Entry names in scheme order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Selects one of the two canonical schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeVariant {
    /// [`ColorScheme::DARK`]
    #[default]
    Dark,
    /// [`ColorScheme::LIGHT`]
    Light,
}

impl SchemeVariant {
    /// The scheme this variant selects.
    #[must_use]
    pub fn scheme(self) -> &'static ColorScheme {
        match self {
            Self::Dark => &ColorScheme::DARK,
            Self::Light => &ColorScheme::LIGHT,
        }
    }
}

impl fmt::Display for SchemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}
