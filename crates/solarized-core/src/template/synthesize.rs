//! Theme synthesis: one template to a dark and a light theme in one pass.

use std::io::{BufRead, Write};

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use tracing::{debug, warn};

use crate::error::Result;
use crate::format::{ThemeFormat, ThemeIdentity};
use crate::scheme::ColorScheme;

use super::{
    is_color_element, rewrite_attributes_pair, GUID_ATTRIBUTE, NAME_ATTRIBUTE, SOURCE_ATTRIBUTE,
    THEME_ELEMENT,
};

/// Counts of `Source` values seen during one synthesis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisSummary {
    /// References replaced by literal colors
    pub substituted: usize,
    /// Values copied unchanged to both themes
    pub passed_through: usize,
    /// Pass-throughs that looked like references but named no scheme entry
    pub unknown_names: usize,
}

/// Literal dark and light values for a template `Source` reference.
///
/// The value must be `<alpha>$<name>` with a non-empty alpha part and a name
/// known to both schemes. The alpha part is copied as written.
#[must_use]
pub fn resolve_source(
    value: &str,
    dark: &ColorScheme,
    light: &ColorScheme,
) -> Option<(String, String)> {
    let (alpha, name) = value.split_once('$')?;
    if alpha.is_empty() {
        return None;
    }
    let dark_color = dark.get(name)?;
    let light_color = light.get(name)?;
    Some((
        format!("{alpha}{}", dark_color.rgb_hex()),
        format!("{alpha}{}", light_color.rgb_hex()),
    ))
}

/// The dark and light output documents, fed the same events in lock-step.
struct ThemeWriters<D: Write, L: Write> {
    dark: Writer<D>,
    light: Writer<L>,
}

impl<D: Write, L: Write> ThemeWriters<D, L> {
    fn new(dark: D, light: L) -> Self {
        Self {
            dark: Writer::new(dark),
            light: Writer::new(light),
        }
    }

    fn write(&mut self, event: Event<'_>) -> Result<()> {
        self.dark.write_event(event.clone())?;
        self.light.write_event(event)?;
        Ok(())
    }

    fn write_split(&mut self, dark: Event<'_>, light: Event<'_>) -> Result<()> {
        self.dark.write_event(dark)?;
        self.light.write_event(light)?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.dark.into_inner().flush()?;
        self.light.into_inner().flush()?;
        Ok(())
    }
}

/// Stream a template from `template` into a dark and a light theme.
///
/// Every event read is written to both outputs. The `Theme` element gets the
/// identities from `format`, and each `Background`/`Foreground` `Source`
/// reference becomes the literal color from `dark_scheme` or `light_scheme`.
/// Anything that does not resolve is copied unchanged to both.
pub fn synthesize<R, D, L>(
    template: R,
    dark: D,
    light: L,
    format: &ThemeFormat,
    dark_scheme: &ColorScheme,
    light_scheme: &ColorScheme,
) -> Result<SynthesisSummary>
where
    R: BufRead,
    D: Write,
    L: Write,
{
    let mut reader = Reader::from_reader(template);
    let mut writers = ThemeWriters::new(dark, light);
    let mut summary = SynthesisSummary::default();
    let mut buf = Vec::new();

    let schemes = (dark_scheme, light_scheme);

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Eof => break,
            Event::Start(start) => {
                let (dark, light) = theme_elements(start, format, schemes, &mut summary)?;
                writers.write_split(Event::Start(dark), Event::Start(light))?;
            }
            Event::Empty(start) => {
                let (dark, light) = theme_elements(start, format, schemes, &mut summary)?;
                writers.write_split(Event::Empty(dark), Event::Empty(light))?;
            }
            event => writers.write(event)?,
        }
        buf.clear();
    }

    writers.finish()?;

    debug!(
        version = format.version,
        substituted = summary.substituted,
        passed_through = summary.passed_through,
        "Synthesized dark and light themes"
    );

    Ok(summary)
}

fn theme_elements<'a>(
    start: BytesStart<'a>,
    format: &ThemeFormat,
    (dark_scheme, light_scheme): (&ColorScheme, &ColorScheme),
    summary: &mut SynthesisSummary,
) -> Result<(BytesStart<'a>, BytesStart<'a>)> {
    let local_name = start.local_name();
    let (dark, light) = if local_name.as_ref() == THEME_ELEMENT {
        rewrite_attributes_pair(&start, |key, _| {
            let pick = |identity: &ThemeIdentity| match key {
                NAME_ATTRIBUTE => Some(identity.name.to_string()),
                GUID_ATTRIBUTE => Some(identity.guid.to_string()),
                _ => None,
            };
            pick(&format.dark).zip(pick(&format.light))
        })?
    } else if is_color_element(local_name.as_ref()) {
        rewrite_attributes_pair(&start, |key, value| {
            if key != SOURCE_ATTRIBUTE {
                return None;
            }
            let resolved = resolve_source(value, dark_scheme, light_scheme);
            if resolved.is_some() {
                summary.substituted += 1;
            } else {
                summary.passed_through += 1;
                if value.contains('$') {
                    summary.unknown_names += 1;
                    warn!(value, "Source names no scheme entry, keeping it");
                } else {
                    debug!(value, "Source is not a reference, keeping it");
                }
            }
            resolved
        })?
    } else {
        (None, None)
    };

    let dark = dark.unwrap_or_else(|| start.clone());
    let light = light.unwrap_or(start);
    Ok((dark, light))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (String, String, SynthesisSummary) {
        let mut dark = Vec::new();
        let mut light = Vec::new();
        let summary = synthesize(
            input.as_bytes(),
            &mut dark,
            &mut light,
            &ThemeFormat::VS2017,
            &ColorScheme::DARK,
            &ColorScheme::LIGHT,
        )
        .unwrap();
        (
            String::from_utf8(dark).unwrap(),
            String::from_utf8(light).unwrap(),
            summary,
        )
    }

    #[test]
    fn test_reference_resolves_per_scheme() {
        let (dark, light, summary) = run(r#"<Background Type="CT_RAW" Source="FF$BackgroundDefault"/>"#);
        assert_eq!(dark, r#"<Background Type="CT_RAW" Source="FF002B36"/>"#);
        assert_eq!(light, r#"<Background Type="CT_RAW" Source="FFFDF6E3"/>"#);
        assert_eq!(summary.substituted, 1);
    }

    #[test]
    fn test_accents_are_identical_in_both_themes() {
        let (dark, light, _) = run(r#"<Foreground Source="80$Violet"/>"#);
        assert_eq!(dark, r#"<Foreground Source="806C71C4"/>"#);
        assert_eq!(dark, light);
    }

    #[test]
    fn test_theme_identity_is_fixed() {
        let (dark, light, _) = run(r#"<Theme Name="$ThemeName" GUID="$GUID" FallbackId="{x}"></Theme>"#);
        assert_eq!(
            dark,
            r#"<Theme Name="Solarized 2017 (Dark)" GUID="{4f4527a7-e5d3-4382-8ba0-126c0f0d3fe9}" FallbackId="{x}"></Theme>"#
        );
        assert_eq!(
            light,
            r#"<Theme Name="Solarized 2017 (Light)" GUID="{4d3b11ea-fd11-48f8-a8df-6911f7a5d892}" FallbackId="{x}"></Theme>"#
        );
    }

    #[test]
    fn test_theme_identity_ignores_template_text() {
        let (dark, light, _) = run(r#"<Theme Name="Anything" GUID="{abc}"/>"#);
        assert!(dark.contains(r#"Name="Solarized 2017 (Dark)""#));
        assert!(light.contains(r#"GUID="{4d3b11ea-fd11-48f8-a8df-6911f7a5d892}""#));
    }

    #[test]
    fn test_unresolvable_values_pass_through() {
        let input = concat!(
            "<Colors>\n",
            "  <Background Source=\"notacolor\"/>\n",
            "  <Background Source=\"FF002B36\"/>\n",
            "  <Background Source=\"$Red\"/>\n",
            "  <Foreground Source=\"FF$Purple\"/>\n",
            "  <Foreground Source=\"\"/>\n",
            "</Colors>",
        );
        let (dark, light, summary) = run(input);
        assert_eq!(dark, input);
        assert_eq!(light, input);
        assert_eq!(summary.passed_through, 5);
        assert_eq!(summary.unknown_names, 2);
        assert_eq!(summary.substituted, 0);
    }

    #[test]
    fn test_outputs_share_structure() {
        let input = "<Themes>\n\t<Theme Name=\"$ThemeName\" GUID=\"$GUID\">\n\t\t<!-- c -->\n\t\t\
                     <Category Name=\"Editor\"><Color Name=\"Plain\"><Background Source=\"FF$Highlight2\"/>\
                     </Color></Category>\n\t</Theme>\n</Themes>\n";
        let (dark, light, _) = run(input);
        let strip = |s: &str| {
            s.replace("Solarized 2017 (Dark)", "N")
                .replace("Solarized 2017 (Light)", "N")
                .replace("{4f4527a7-e5d3-4382-8ba0-126c0f0d3fe9}", "G")
                .replace("{4d3b11ea-fd11-48f8-a8df-6911f7a5d892}", "G")
                .replace("FFFDF6E3", "C")
                .replace("FF002B36", "C")
        };
        assert_eq!(strip(&dark), strip(&light));
        assert!(dark.contains("<Background Source=\"FFFDF6E3\"/>"));
        assert!(light.contains("<Background Source=\"FF002B36\"/>"));
        assert!(dark.ends_with("\n\t</Theme>\n</Themes>\n"));
    }

    #[test]
    fn test_resolve_source() {
        let (dark, light) =
            resolve_source("4D$SecondaryContent", &ColorScheme::DARK, &ColorScheme::LIGHT).unwrap();
        assert_eq!(dark, "4D586E75");
        assert_eq!(light, "4D93A1A1");

        assert!(resolve_source("FF$", &ColorScheme::DARK, &ColorScheme::LIGHT).is_none());
        assert!(resolve_source("FFRed", &ColorScheme::DARK, &ColorScheme::LIGHT).is_none());
        assert!(resolve_source("FF$Red$", &ColorScheme::DARK, &ColorScheme::LIGHT).is_none());
    }

    #[test]
    fn test_malformed_template_is_parse_error() {
        let mut dark = Vec::new();
        let mut light = Vec::new();
        let err = synthesize(
            "<Themes></Theme>".as_bytes(),
            &mut dark,
            &mut light,
            &ThemeFormat::VS2015,
            &ColorScheme::DARK,
            &ColorScheme::LIGHT,
        )
        .unwrap_err();
        assert!(matches!(err, crate::Error::Parse(_)), "got {err:?}");
    }
}
