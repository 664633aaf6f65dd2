//! The Solarized palette.
//!
//! Sixteen fixed colors: eight tones forming a ramp from the darkest
//! background (`BASE03`) to the lightest (`BASE3`), and eight accents.

use crate::color::Color;

/// Dark background.
pub const BASE03: Color = Color::from_argb(0xFF00_2B36);
/// Dark background highlight.
pub const BASE02: Color = Color::from_argb(0xFF07_3642);
/// Dark secondary content, light emphasized content.
pub const BASE01: Color = Color::from_argb(0xFF58_6E75);
/// Light primary content.
pub const BASE00: Color = Color::from_argb(0xFF65_7B83);
/// Dark primary content.
pub const BASE0: Color = Color::from_argb(0xFF83_9496);
/// Light secondary content, dark emphasized content.
pub const BASE1: Color = Color::from_argb(0xFF93_A1A1);
/// Light background highlight.
pub const BASE2: Color = Color::from_argb(0xFFEE_E8D5);
/// Light background.
pub const BASE3: Color = Color::from_argb(0xFFFD_F6E3);

/// Yellow accent.
pub const YELLOW: Color = Color::from_argb(0xFFB5_8900);
/// Orange accent.
pub const ORANGE: Color = Color::from_argb(0xFFCB_4B16);
/// Red accent.
pub const RED: Color = Color::from_argb(0xFFDC_322F);
/// Magenta accent.
pub const MAGENTA: Color = Color::from_argb(0xFFD3_3682);
/// Violet accent.
pub const VIOLET: Color = Color::from_argb(0xFF6C_71C4);
/// Blue accent.
pub const BLUE: Color = Color::from_argb(0xFF26_8BD2);
/// Cyan accent.
pub const CYAN: Color = Color::from_argb(0xFF2A_A198);
/// Green accent.
pub const GREEN: Color = Color::from_argb(0xFF85_9900);

/// The tone ramp, darkest first.
pub const TONES: [Color; 8] = [BASE03, BASE02, BASE01, BASE00, BASE0, BASE1, BASE2, BASE3];

/// Accent colors paired with the names templates use for them.
pub const ACCENTS: [(&str, Color); 8] = [
    ("Yellow", YELLOW),
    ("Orange", ORANGE),
    ("Red", RED),
    ("Magenta", MAGENTA),
    ("Violet", VIOLET),
    ("Blue", BLUE),
    ("Cyan", CYAN),
    ("Green", GREEN),
];
