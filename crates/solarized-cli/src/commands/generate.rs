//! Theme generation command implementation.

use anyhow::{Context, Result};

use solarized_core::generator::write_themes;
use solarized_core::template::SynthesisSummary;
use solarized_core::ThemeFormat;

use super::ResolvedPaths;
use crate::ui;

/// Generate the dark and light themes from the template.
pub fn run(paths: &ResolvedPaths, format: &ThemeFormat, json: bool) -> Result<()> {
    let summary = write_themes(&paths.template, &paths.dark_theme, &paths.light_theme, format)
        .with_context(|| format!("Failed to generate themes from {}", paths.template.display()))?;

    if json {
        output_json(paths, format, &summary)
    } else {
        display(paths, format, &summary);
        Ok(())
    }
}

fn output_json(paths: &ResolvedPaths, format: &ThemeFormat, summary: &SynthesisSummary) -> Result<()> {
    let output = serde_json::json!({
        "action": "generate",
        "format": format.version,
        "template": paths.template.display().to_string(),
        "dark_theme": {
            "path": paths.dark_theme.display().to_string(),
            "name": format.dark.name,
            "guid": format.dark.guid,
        },
        "light_theme": {
            "path": paths.light_theme.display().to_string(),
            "name": format.light.name,
            "guid": format.light.guid,
        },
        "colors": {
            "substituted": summary.substituted,
            "passed_through": summary.passed_through,
            "unknown_names": summary.unknown_names,
        },
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn display(paths: &ResolvedPaths, format: &ThemeFormat, summary: &SynthesisSummary) {
    ui::heading(&format!("Generated Solarized {} themes", format.version));
    ui::path_field("Template", &paths.template);
    ui::path_field("Dark", &paths.dark_theme);
    ui::path_field("Light", &paths.light_theme);
    ui::field("Colors", ui::count(summary.substituted, "color"));
    if summary.unknown_names > 0 {
        ui::field(
            "Unknown",
            format!(
                "{} (left as written)",
                ui::count(summary.unknown_names, "reference")
            ),
        );
    }
    println!();
}
