//! Console color table command implementation.

use std::collections::BTreeMap;
use std::io;

use anyhow::{Context, Result};

use solarized_core::console::{apply_color_table, RegistryScript, CONSOLE_KEY};
use solarized_core::SchemeVariant;

/// Print the console color table for `variant`.
///
/// The default output is a `.reg` script that can be imported with
/// `reg import`. With `json`, the slots are printed as an object instead.
pub fn run(variant: SchemeVariant, json: bool) -> Result<()> {
    if json {
        return output_json(variant);
    }

    let stdout = io::stdout();
    let mut script = RegistryScript::new(stdout.lock());
    apply_color_table(&mut script, variant.scheme()).context("Failed to write color table")?;
    script.finish().context("Failed to write color table")?;
    Ok(())
}

fn output_json(variant: SchemeVariant) -> Result<()> {
    let mut slots: BTreeMap<String, u32> = BTreeMap::new();
    apply_color_table(&mut slots, variant.scheme())?;

    let output = serde_json::json!({
        "key": CONSOLE_KEY,
        "scheme": variant.to_string(),
        "slots": slots,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
