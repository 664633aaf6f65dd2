//! ARGB color values.
//!
//! Theme documents store colors as 8-digit `AARRGGBB` hexadecimal literals.
//! This module parses and formats that notation and measures the distance
//! between two colors in RGB space.
//!
//! ## Example
//!
//! ```rust
//! use solarized_core::color::Color;
//!
//! let color = Color::parse_argb_hex("FF002B36").unwrap();
//! assert_eq!(color.rgb_hex(), "002B36");
//! assert_eq!(color.a, 0xFF);
//! ```

use std::fmt;

/// Number of hex digits in an `AARRGGBB` literal.
pub const ARGB_HEX_LEN: usize = 8;

/// A 24-bit RGB color with an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Create a color from its components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a packed `0xAARRGGBB` value.
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self { r, g, b, a }
    }

    /// Parse an `AARRGGBB` literal.
    ///
    /// Returns `None` unless the input is exactly eight ASCII hex digits.
    /// Signs, prefixes and surrounding whitespace are rejected.
    #[must_use]
    pub fn parse_argb_hex(input: &str) -> Option<Self> {
        if input.len() != ARGB_HEX_LEN || !input.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(input, 16).ok().map(Self::from_argb)
    }

    /// Packed `0xAARRGGBB` value.
    #[must_use]
    pub const fn argb(self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    /// The same color with a different alpha channel.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// The RGB part as six uppercase hex digits (`RRGGBB`).
    #[must_use]
    pub fn rgb_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Summed squared per-channel difference. Alpha is ignored.
    #[must_use]
    pub const fn distance_squared(self, other: Self) -> u32 {
        let dr = self.r.abs_diff(other.r) as u32;
        let dg = self.g.abs_diff(other.g) as u32;
        let db = self.b.abs_diff(other.b) as u32;
        dr * dr + dg * dg + db * db
    }

    /// Euclidean distance in RGB space. Alpha is ignored.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        f64::from(self.distance_squared(other)).sqrt()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.argb())
    }
}
