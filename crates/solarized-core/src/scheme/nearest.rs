//! Nearest-color matching against a [`ColorScheme`].

use crate::color::Color;

use super::ColorScheme;

/// The scheme entry closest to some input color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearestMatch {
    /// Role or accent name of the entry
    pub name: &'static str,
    /// Color of the entry
    pub color: Color,
    /// Squared RGB distance between the input and the entry
    pub distance_squared: u32,
}

impl NearestMatch {
    /// Whether the input had exactly this entry's RGB value.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.distance_squared == 0
    }

    /// Euclidean RGB distance between the input and the entry.
    #[must_use]
    pub fn distance(&self) -> f64 {
        f64::from(self.distance_squared).sqrt()
    }
}

/// Find the scheme entry nearest to `input` in RGB space.
///
/// Entries are scanned in scheme order. A later entry replaces the current
/// best only when it is strictly closer, so among equidistant entries the
/// first one wins. An exact match ends the scan.
#[must_use]
pub fn nearest_color(scheme: &ColorScheme, input: Color) -> NearestMatch {
    let (first_name, first_color) = scheme.entries[0];
    let mut best = NearestMatch {
        name: first_name,
        color: first_color,
        distance_squared: input.distance_squared(first_color),
    };

    for (name, color) in scheme.iter() {
        let distance_squared = input.distance_squared(color);
        let candidate = NearestMatch {
            name,
            color,
            distance_squared,
        };

        if distance_squared == 0 {
            return candidate;
        }
        if distance_squared < best.distance_squared {
            best = candidate;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use crate::scheme::{Tone, TONE_COUNT};

    #[test]
    fn test_exact_palette_colors_match_themselves() {
        for scheme in [&ColorScheme::DARK, &ColorScheme::LIGHT] {
            for (name, color) in scheme.iter() {
                let found = nearest_color(scheme, color);
                assert_eq!(found.name, name);
                assert_eq!(found.color, color);
                assert!(found.is_exact());
            }
        }
    }

    #[test]
    fn test_alpha_does_not_affect_match() {
        let found = nearest_color(&ColorScheme::DARK, palette::BASE03.with_alpha(0x40));
        assert_eq!(found.name, "BackgroundDefault");
        assert!(found.is_exact());
    }

    #[test]
    fn test_quantizes_to_closest_entry() {
        let almost_blue = Color::new(0x27, 0x8A, 0xD0, 0xFF);
        let found = nearest_color(&ColorScheme::DARK, almost_blue);
        assert_eq!(found.name, "Blue");
        assert_eq!(found.distance_squared, 1 + 1 + 4);
        assert!(!found.is_exact());
    }

    #[test]
    fn test_same_input_differs_per_scheme() {
        let near_black = Color::new(0x01, 0x2A, 0x35, 0xFF);
        assert_eq!(
            nearest_color(&ColorScheme::DARK, near_black).name,
            "BackgroundDefault"
        );
        assert_eq!(
            nearest_color(&ColorScheme::LIGHT, near_black).name,
            "Highlight2"
        );
    }

    #[test]
    fn test_tie_break_prefers_earlier_entry() {
        let mut tones = palette::TONES;
        tones[Tone::Highlight1 as usize] = palette::BASE03;
        let scheme = ColorScheme::new("Duplicated", tones);

        // BackgroundDefault and Highlight1 are both BASE03 and equidistant.
        let input = Color::new(0x00, 0x2B, 0x37, 0xFF);
        let found = nearest_color(&scheme, input);
        assert_eq!(found.name, "BackgroundDefault");
        assert_eq!(found.distance_squared, 1);
    }

    #[test]
    fn test_tie_break_between_distinct_colors() {
        let mut tones = [Color::new(0xFF, 0xFF, 0xFF, 0xFF); TONE_COUNT];
        tones[Tone::BackgroundDefault as usize] = Color::new(0, 0, 0, 0xFF);
        tones[Tone::BackgroundHighlight as usize] = Color::new(0, 0, 10, 0xFF);
        let scheme = ColorScheme::new("Ramp", tones);

        let found = nearest_color(&scheme, Color::new(0, 0, 5, 0xFF));
        assert_eq!(found.name, "BackgroundDefault");
        assert!((found.distance() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_entry_wins_when_every_entry_ties() {
        let scheme = ColorScheme::new("Flat", [palette::YELLOW; TONE_COUNT]);

        let found = nearest_color(&scheme, Color::new(0xB5, 0x89, 0x01, 0xFF));
        assert_eq!(found.name, "Yellow");
        assert_eq!(found.color, palette::YELLOW);
        assert_eq!(found.distance_squared, 1);
    }

    #[test]
    fn test_result_always_names_an_entry() {
        for input in [Color::new(0, 0, 0, 0), Color::new(0xFF, 0xFF, 0xFF, 0xFF)] {
            for scheme in [&ColorScheme::DARK, &ColorScheme::LIGHT] {
                let found = nearest_color(scheme, input);
                assert_eq!(scheme.get(found.name), Some(found.color));
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let input = Color::new(0x80, 0x80, 0x80, 0xFF);
        let first = nearest_color(&ColorScheme::LIGHT, input);
        for _ in 0..10 {
            assert_eq!(nearest_color(&ColorScheme::LIGHT, input), first);
        }
    }
}
