//! Template extraction: concrete theme to template.

use std::io::{BufRead, Write};

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use tracing::debug;

use crate::color::Color;
use crate::error::Result;
use crate::format::{GUID_PLACEHOLDER, THEME_NAME_PLACEHOLDER};
use crate::scheme::{nearest_color, ColorScheme, NearestMatch};

use super::{
    is_color_element, rewrite_attributes, GUID_ATTRIBUTE, NAME_ATTRIBUTE, SOURCE_ATTRIBUTE,
    THEME_ELEMENT,
};

/// Counts of `Source` values seen during one extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Literals that matched a scheme entry exactly
    pub exact: usize,
    /// Literals replaced by their nearest, non-identical scheme entry
    pub quantized: usize,
    /// Values that were not color literals and were copied unchanged
    pub passed_through: usize,
}

impl ExtractSummary {
    /// Number of color literals replaced by references.
    #[must_use]
    pub const fn colors(&self) -> usize {
        self.exact + self.quantized
    }
}

/// Template reference for a `Source` value: two hex digits of the original
/// alpha, `$`, then the nearest entry name.
///
/// Returns `None` if `value` is not an `AARRGGBB` literal.
#[must_use]
pub fn source_reference(value: &str, scheme: &ColorScheme) -> Option<(String, NearestMatch)> {
    let color = Color::parse_argb_hex(value)?;
    let found = nearest_color(scheme, color);
    Some((format!("{:02X}${}", color.a, found.name), found))
}

/// Stream a concrete theme from `source` to `destination` as a template.
///
/// The `Theme` element's `Name` and `GUID` become placeholders and every
/// `Background`/`Foreground` `Source` literal becomes a reference to the
/// nearest entry of `scheme`. Everything else is copied verbatim.
pub fn extract<R, W>(source: R, destination: W, scheme: &ColorScheme) -> Result<ExtractSummary>
where
    R: BufRead,
    W: Write,
{
    let mut reader = Reader::from_reader(source);
    let mut writer = Writer::new(destination);
    let mut summary = ExtractSummary::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Eof => break,
            Event::Start(start) => {
                let start = template_element(start, scheme, &mut summary)?;
                writer.write_event(Event::Start(start))?;
            }
            Event::Empty(start) => {
                let start = template_element(start, scheme, &mut summary)?;
                writer.write_event(Event::Empty(start))?;
            }
            event => writer.write_event(event)?,
        }
        buf.clear();
    }

    writer.into_inner().flush()?;

    debug!(
        scheme = scheme.name(),
        exact = summary.exact,
        quantized = summary.quantized,
        passed_through = summary.passed_through,
        "Extracted template"
    );

    Ok(summary)
}

fn template_element<'a>(
    start: BytesStart<'a>,
    scheme: &ColorScheme,
    summary: &mut ExtractSummary,
) -> Result<BytesStart<'a>> {
    let local_name = start.local_name();
    let rewritten = if local_name.as_ref() == THEME_ELEMENT {
        rewrite_attributes(&start, |key, _| match key {
            NAME_ATTRIBUTE => Some(THEME_NAME_PLACEHOLDER.to_string()),
            GUID_ATTRIBUTE => Some(GUID_PLACEHOLDER.to_string()),
            _ => None,
        })?
    } else if is_color_element(local_name.as_ref()) {
        rewrite_attributes(&start, |key, value| {
            if key != SOURCE_ATTRIBUTE {
                return None;
            }
            let Some((reference, found)) = source_reference(value, scheme) else {
                debug!(value, "Source is not a color literal, keeping it");
                summary.passed_through += 1;
                return None;
            };
            if found.is_exact() {
                summary.exact += 1;
            } else {
                debug!(
                    value,
                    nearest = found.name,
                    distance = found.distance(),
                    "Quantized color to nearest scheme entry"
                );
                summary.quantized += 1;
            }
            Some(reference)
        })?
    } else {
        None
    };

    Ok(rewritten.unwrap_or(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, scheme: &ColorScheme) -> (String, ExtractSummary) {
        let mut out = Vec::new();
        let summary = extract(input.as_bytes(), &mut out, scheme).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_exact_color_becomes_reference() {
        let (out, summary) = run(r#"<Background Type="CT_RAW" Source="FF002B36"/>"#, &ColorScheme::DARK);
        assert_eq!(out, r#"<Background Type="CT_RAW" Source="FF$BackgroundDefault"/>"#);
        assert_eq!(summary.exact, 1);
        assert_eq!(summary.colors(), 1);
    }

    #[test]
    fn test_alpha_is_preserved() {
        let (out, summary) = run(r#"<Foreground Source="4C073642" />"#, &ColorScheme::DARK);
        assert_eq!(out, r#"<Foreground Source="4C$BackgroundHighlight" />"#);
        assert_eq!(summary.exact, 1);

        let (out, _) = run(r#"<Foreground Source="00073642" />"#, &ColorScheme::LIGHT);
        assert_eq!(out, r#"<Foreground Source="00$Highlight1" />"#);
    }

    #[test]
    fn test_quantized_color() {
        let (out, summary) = run(r#"<Background Source="FF278AD0"/>"#, &ColorScheme::DARK);
        assert_eq!(out, r#"<Background Source="FF$Blue"/>"#);
        assert_eq!(summary.quantized, 1);
        assert_eq!(summary.exact, 0);
    }

    #[test]
    fn test_theme_identity_becomes_placeholders() {
        let (out, _) = run(
            r#"<Theme Name="Original" GUID="{abc}" FallbackId="{def}"></Theme>"#,
            &ColorScheme::DARK,
        );
        assert_eq!(
            out,
            r#"<Theme Name="$ThemeName" GUID="$GUID" FallbackId="{def}"></Theme>"#
        );
    }

    #[test]
    fn test_non_literals_pass_through() {
        let input = concat!(
            r#"<Colors>"#,
            r#"<Background Source="notacolor"/>"#,
            r#"<Background Source=""/>"#,
            r#"<Foreground Source="FF$Unknown"/>"#,
            r#"</Colors>"#,
        );
        let (out, summary) = run(input, &ColorScheme::DARK);
        assert_eq!(out, input);
        assert_eq!(summary.passed_through, 3);
        assert_eq!(summary.colors(), 0);
    }

    #[test]
    fn test_source_only_rewritten_on_color_elements() {
        let input = r#"<Color Name="Text" Source="FF002B36"><Background Name="FF002B36"/></Color>"#;
        let (out, summary) = run(input, &ColorScheme::DARK);
        assert_eq!(out, input);
        assert_eq!(summary, ExtractSummary::default());
    }

    #[test]
    fn test_whitespace_and_comments_preserved() {
        let input = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\r\n\
                     <Themes>\n  <!-- keep me -->\n\t<Theme Name=\"x\" GUID=\"y\">\n    \
                     <Background   Type=\"CT_RAW\"   Source=\"FF002B36\" />\n  </Theme>\n</Themes>\n";
        let (out, _) = run(input, &ColorScheme::DARK);
        let expected = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\r\n\
                        <Themes>\n  <!-- keep me -->\n\t<Theme Name=\"$ThemeName\" GUID=\"$GUID\">\n    \
                        <Background Type=\"CT_RAW\" Source=\"FF$BackgroundDefault\" />\n  </Theme>\n</Themes>\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_malformed_xml_is_parse_error() {
        let mut out = Vec::new();
        let err = extract(
            "<Themes><Theme></Themes>".as_bytes(),
            &mut out,
            &ColorScheme::DARK,
        )
        .unwrap_err();
        assert!(matches!(err, crate::Error::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_source_reference() {
        let (reference, found) = source_reference("80DC322F", &ColorScheme::LIGHT).unwrap();
        assert_eq!(reference, "80$Red");
        assert!(found.is_exact());
        assert!(source_reference("80$Red", &ColorScheme::LIGHT).is_none());
    }
}
