//! UI utilities for Solarized CLI.

use std::path::Path;

const RULE_WIDTH: usize = 48;

/// Print an error and any suggestion attached to it to stderr.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("Error: {err:#}");
    if let Some(suggestion) = suggestion(err) {
        eprintln!();
        eprintln!("{suggestion}");
    }
}

fn suggestion(err: &anyhow::Error) -> Option<&'static str> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<solarized_core::Error>())
        .and_then(solarized_core::Error::suggestion)
}

/// Print a heading followed by a horizontal rule.
pub fn heading(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Print one aligned `label  value` line.
pub fn field(label: &str, value: impl std::fmt::Display) {
    println!("  {label:<12}{value}");
}

/// Print a path field.
pub fn path_field(label: &str, path: &Path) {
    field(label, path.display());
}

/// Format a count with its noun, e.g. "1 color" or "3 colors".
pub fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        assert_eq!(count(0, "color"), "0 colors");
        assert_eq!(count(1, "color"), "1 color");
        assert_eq!(count(12, "value"), "12 values");
    }

    #[test]
    fn test_suggestion_found_through_context() {
        use anyhow::Context;

        let result: anyhow::Result<()> =
            Err(solarized_core::Error::NotFound("x.xml".into())).context("Failed to generate");
        let err = result.unwrap_err();
        assert!(suggestion(&err).is_some());

        let plain = anyhow::anyhow!("something else");
        assert!(suggestion(&plain).is_none());
    }
}
