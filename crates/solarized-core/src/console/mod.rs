//! Console color table export.
//!
//! The Windows console keeps sixteen colors under `HKEY_CURRENT_USER\Console`
//! as DWORD values named `ColorTable00` through `ColorTable15`, each a
//! `COLORREF` (`0x00BBGGRR`). This module maps scheme roles onto those slots
//! and writes them through a [`ColorTableStore`], which is the boundary to
//! whatever actually persists them.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use solarized_core::console::apply_color_table;
//! use solarized_core::scheme::ColorScheme;
//!
//! let mut table: BTreeMap<String, u32> = BTreeMap::new();
//! apply_color_table(&mut table, &ColorScheme::DARK)?;
//! assert_eq!(table["ColorTable00"], 0x0036_2B00);
//! # Ok::<(), solarized_core::Error>(())
//! ```

use std::collections::BTreeMap;
use std::io::Write;

use crate::color::Color;
use crate::error::Result;
use crate::scheme::ColorScheme;

/// Registry key holding the console color table.
pub const CONSOLE_KEY: &str = r"HKEY_CURRENT_USER\Console";

/// Scheme entry shown in each console slot, by slot index.
pub const SLOT_ROLES: [&str; 16] = [
    "BackgroundDefault",
    "PrimaryContent",
    "SecondaryContent",
    "EmphasizedContent",
    "Orange",
    "Violet",
    "MiddleGray",
    "Highlight1",
    "BackgroundHighlight",
    "Blue",
    "Green",
    "Cyan",
    "Red",
    "Magenta",
    "Yellow",
    "Highlight2",
];

/// Value name of a console slot, e.g. `ColorTable07`.
#[must_use]
pub fn slot_name(index: usize) -> String {
    format!("ColorTable{index:02}")
}

/// Encode a color as a Windows `COLORREF` (`0x00BBGGRR`).
#[must_use]
pub const fn colorref(color: Color) -> u32 {
    u32::from_le_bytes([color.r, color.g, color.b, 0])
}

/// A flat key/value store that receives console slot values.
pub trait ColorTableStore {
    /// Set one named slot to a `COLORREF` value.
    fn set_slot(&mut self, name: &str, value: u32) -> Result<()>;
}

impl ColorTableStore for BTreeMap<String, u32> {
    fn set_slot(&mut self, name: &str, value: u32) -> Result<()> {
        self.insert(name.to_string(), value);
        Ok(())
    }
}

/// Slot names and values for `scheme`, in slot order.
#[must_use]
pub fn color_table(scheme: &ColorScheme) -> Vec<(String, u32)> {
    SLOT_ROLES
        .iter()
        .enumerate()
        .filter_map(|(index, role)| {
            scheme
                .get(role)
                .map(|color| (slot_name(index), colorref(color)))
        })
        .collect()
}

/// Write all sixteen slots for `scheme` into `store`.
pub fn apply_color_table<S: ColorTableStore + ?Sized>(
    store: &mut S,
    scheme: &ColorScheme,
) -> Result<()> {
    for (name, value) in color_table(scheme) {
        store.set_slot(&name, value)?;
    }
    Ok(())
}

/// A store that emits a `.reg` script importing the color table.
pub struct RegistryScript<W: Write> {
    out: W,
    started: bool,
}

impl<W: Write> RegistryScript<W> {
    /// Create a script writer over `out`.
    pub const fn new(out: W) -> Self {
        Self {
            out,
            started: false,
        }
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        if !self.started {
            self.write_header()?;
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(self.out, "Windows Registry Editor Version 5.00")?;
        writeln!(self.out)?;
        writeln!(self.out, "[{CONSOLE_KEY}]")?;
        self.started = true;
        Ok(())
    }
}

impl<W: Write> ColorTableStore for RegistryScript<W> {
    fn set_slot(&mut self, name: &str, value: u32) -> Result<()> {
        if !self.started {
            self.write_header()?;
        }
        writeln!(self.out, "\"{name}\"=dword:{value:08x}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn test_colorref_byte_order() {
        assert_eq!(colorref(palette::BLUE), 0x00D2_8B26);
        assert_eq!(colorref(palette::BASE3.with_alpha(0)), 0x00E3_F6FD);
    }

    #[test]
    fn test_every_slot_role_is_in_both_schemes() {
        for role in SLOT_ROLES {
            assert!(ColorScheme::DARK.contains(role), "{role}");
            assert!(ColorScheme::LIGHT.contains(role), "{role}");
        }
        assert_eq!(color_table(&ColorScheme::LIGHT).len(), 16);
    }

    #[test]
    fn test_apply_to_map() {
        let mut table: BTreeMap<String, u32> = BTreeMap::new();
        apply_color_table(&mut table, &ColorScheme::LIGHT).unwrap();

        assert_eq!(table.len(), 16);
        assert_eq!(table["ColorTable00"], colorref(palette::BASE3));
        assert_eq!(table["ColorTable04"], colorref(palette::ORANGE));
        assert_eq!(table["ColorTable15"], colorref(palette::BASE03));
    }

    #[test]
    fn test_registry_script() {
        let mut script = RegistryScript::new(Vec::new());
        apply_color_table(&mut script, &ColorScheme::DARK).unwrap();
        let text = String::from_utf8(script.finish().unwrap()).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Windows Registry Editor Version 5.00"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some(r"[HKEY_CURRENT_USER\Console]"));
        assert_eq!(lines.next(), Some("\"ColorTable00\"=dword:00362b00"));
        assert_eq!(text.lines().count(), 3 + 16);
        assert!(text.ends_with("\"ColorTable15\"=dword:00e3f6fd\n"));
    }
}
