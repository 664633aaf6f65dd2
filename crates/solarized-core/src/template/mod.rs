//! Streaming conversion between concrete themes and theme templates.
//!
//! Both directions copy the XML event stream verbatim (whitespace, comments,
//! declarations, end tags) and rewrite attribute values on three elements
//! only:
//!
//! | Element | Attribute | Extraction | Synthesis |
//! |---------|-----------|------------|-----------|
//! | `Theme` | `Name` | `$ThemeName` | dark/light display name |
//! | `Theme` | `GUID` | `$GUID` | dark/light GUID |
//! | `Background`, `Foreground` | `Source` | `AA$Name` | `AARRGGBB` |
//!
//! `Source` values that do not have the expected shape pass through
//! unchanged in both directions.
//!
//! A tag whose values change is written back as a whole new tag. Its
//! attributes keep their order and raw values but are separated by single
//! spaces, and values are double-quoted unless they contain `"`. Whitespace
//! before `>` or `/>` is kept. Tags with no changed value are copied as read.
//!
//! ## Example
//!
//! ```rust
//! use solarized_core::scheme::ColorScheme;
//! use solarized_core::template::extract;
//!
//! let theme = br#"<Themes><Theme Name="Mine" GUID="{1}"><Background Source="FF002B36"/></Theme></Themes>"#;
//! let mut template = Vec::new();
//! extract(&theme[..], &mut template, &ColorScheme::DARK)?;
//!
//! let template = String::from_utf8(template).unwrap();
//! assert!(template.contains(r#"Source="FF$BackgroundDefault""#));
//! # Ok::<(), solarized_core::Error>(())
//! ```

pub mod extract;
pub mod synthesize;

use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::BytesStart;

use crate::error::Result;

pub use extract::{extract, source_reference, ExtractSummary};
pub use synthesize::{resolve_source, synthesize, SynthesisSummary};

/// Element carrying the theme identity.
pub const THEME_ELEMENT: &[u8] = b"Theme";
/// Display name attribute of [`THEME_ELEMENT`].
pub const NAME_ATTRIBUTE: &[u8] = b"Name";
/// Identifier attribute of [`THEME_ELEMENT`].
pub const GUID_ATTRIBUTE: &[u8] = b"GUID";
/// Color attribute of `Background` and `Foreground` elements.
pub const SOURCE_ATTRIBUTE: &[u8] = b"Source";

/// Whether an element's `Source` attribute holds a color.
pub(crate) fn is_color_element(local_name: &[u8]) -> bool {
    matches!(local_name, b"Background" | b"Foreground")
}

/// A start tag being rebuilt attribute by attribute.
///
/// Attributes are re-emitted with single-space separators, line breaks
/// included. Values that are kept are copied as raw bytes with their original
/// escaping and are double-quoted unless they contain `"`. Trailing
/// whitespace before `>` or `/>` is carried over.
struct Rebuilt {
    content: Vec<u8>,
    name_len: usize,
    changed: bool,
}

impl Rebuilt {
    fn new(original: &BytesStart<'_>) -> Self {
        let name = original.name();
        Self {
            content: name.as_ref().to_vec(),
            name_len: name.as_ref().len(),
            changed: false,
        }
    }

    fn push(&mut self, attr: &Attribute<'_>, current: &str, replacement: Option<&str>) {
        self.content.push(b' ');
        self.content.extend_from_slice(attr.key.as_ref());
        self.content.push(b'=');
        match replacement {
            Some(value) if value != current => {
                let escaped = escape(value);
                push_quoted(&mut self.content, escaped.as_bytes());
                self.changed = true;
            }
            _ => push_quoted(&mut self.content, &attr.value),
        }
    }

    fn finish<'b>(mut self, original: &BytesStart<'_>) -> Option<BytesStart<'b>> {
        if !self.changed {
            return None;
        }
        self.content.extend_from_slice(trailing_whitespace(original));
        let content = String::from_utf8_lossy(&self.content).into_owned();
        Some(BytesStart::from_content(content, self.name_len))
    }
}

fn push_quoted(out: &mut Vec<u8>, raw_value: &[u8]) {
    let quote = if raw_value.contains(&b'"') { b'\'' } else { b'"' };
    out.push(quote);
    out.extend_from_slice(raw_value);
    out.push(quote);
}

fn trailing_whitespace<'s>(start: &'s BytesStart<'_>) -> &'s [u8] {
    let content: &[u8] = start;
    let end = content
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |i| i + 1);
    &content[end..]
}

/// Rebuild `start` with the values returned by `rewrite`.
///
/// `rewrite` receives each attribute's key and unescaped value and returns a
/// replacement, or `None` to keep it. Returns `None` when no value changed,
/// so callers can write the original tag untouched.
pub(crate) fn rewrite_attributes<'a, F>(
    start: &BytesStart<'a>,
    mut rewrite: F,
) -> Result<Option<BytesStart<'a>>>
where
    F: FnMut(&[u8], &str) -> Option<String>,
{
    let mut rebuilt = Rebuilt::new(start);

    for attr in start.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;
        let replacement = rewrite(attr.key.as_ref(), &value);
        rebuilt.push(&attr, &value, replacement.as_deref());
    }

    Ok(rebuilt.finish(start))
}

/// Like [`rewrite_attributes`], producing separate dark and light tags.
pub(crate) fn rewrite_attributes_pair<'a, F>(
    start: &BytesStart<'a>,
    mut rewrite: F,
) -> Result<(Option<BytesStart<'a>>, Option<BytesStart<'a>>)>
where
    F: FnMut(&[u8], &str) -> Option<(String, String)>,
{
    let mut dark = Rebuilt::new(start);
    let mut light = Rebuilt::new(start);

    for attr in start.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;
        match rewrite(attr.key.as_ref(), &value) {
            Some((dark_value, light_value)) => {
                dark.push(&attr, &value, Some(&dark_value));
                light.push(&attr, &value, Some(&light_value));
            }
            None => {
                dark.push(&attr, &value, None);
                light.push(&attr, &value, None);
            }
        }
    }

    Ok((dark.finish(start), light.finish(start)))
}
