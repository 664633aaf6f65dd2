//! Template creation command implementation.

use anyhow::{Context, Result};

use solarized_core::generator::{template_source, write_template, TemplateSource};
use solarized_core::template::ExtractSummary;

use super::ResolvedPaths;
use crate::ui;

/// Create the template from the dark theme, or the light one if that's all there is.
pub fn run(paths: &ResolvedPaths, json: bool) -> Result<()> {
    let source = template_source(&paths.dark_theme, &paths.light_theme)?;

    let summary = write_template(&source.path, &paths.template, source.variant.scheme())
        .with_context(|| format!("Failed to create template from {}", source.path.display()))?;

    if json {
        output_json(&source, paths, &summary)
    } else {
        display(&source, paths, &summary);
        Ok(())
    }
}

fn output_json(source: &TemplateSource, paths: &ResolvedPaths, summary: &ExtractSummary) -> Result<()> {
    let output = serde_json::json!({
        "action": "create-template",
        "source": source.path.display().to_string(),
        "scheme": source.variant.to_string(),
        "template": paths.template.display().to_string(),
        "colors": {
            "exact": summary.exact,
            "quantized": summary.quantized,
            "passed_through": summary.passed_through,
        },
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn display(source: &TemplateSource, paths: &ResolvedPaths, summary: &ExtractSummary) {
    ui::heading("Template created");
    ui::path_field("Source", &source.path);
    ui::field("Scheme", source.variant);
    ui::path_field("Template", &paths.template);
    ui::field(
        "Colors",
        format!(
            "{} exact, {} quantized",
            summary.exact, summary.quantized
        ),
    );
    if summary.passed_through > 0 {
        ui::field("Unchanged", ui::count(summary.passed_through, "value"));
    }
    println!();
}
