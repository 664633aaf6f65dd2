//! Common test utilities for `Solarized` integration tests.
//!
//! This module provides shared fixtures and helpers for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Create a temporary directory for test files.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test file with the given content.
pub fn create_test_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Read a file that a test expects to exist.
pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("Failed to read file")
}

/// A dark theme in the 2017 format whose colors are all exact palette
/// colors, and whose identity already matches the generated dark theme.
pub const DARK_THEME_EXACT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Themes>
  <Theme Name="Solarized 2017 (Dark)" GUID="{4f4527a7-e5d3-4382-8ba0-126c0f0d3fe9}" FallbackId="{1ded0138-47ce-435e-84ef-9ec1f439b749}">
    <Category Name="Environment" GUID="{624ed9c3-bdfd-41fa-96c3-7c824ea32e3d}">
      <!-- Main window -->
      <Color Name="EnvironmentBackground">
        <Background Type="CT_RAW" Source="FF002B36" />
        <Foreground Type="CT_RAW" Source="FF839496" />
      </Color>
      <Color Name="SelectionHighlight">
        <Background Type="CT_RAW" Source="66073642" />
      </Color>
      <Color Name="Keyword">
        <Foreground Type="CT_RAW" Source="FF859900" />
      </Color>
      <Color Name="Unset">
        <Background Type="CT_INVALID" Source="notacolor" />
      </Color>
    </Category>
  </Theme>
</Themes>
"#;

/// A theme with literal colors close to, but not exactly on, the palette.
pub const DARK_THEME_APPROXIMATE: &str = r#"<Themes>
  <Theme Name="Hand Tuned" GUID="{00000000-0000-0000-0000-000000000000}">
    <Category Name="Editor">
      <Color Name="Plain"><Background Type="CT_RAW" Source="FF012C37"/></Color>
      <Color Name="Link"><Foreground Type="CT_RAW" Source="C0278AD0"/></Color>
    </Category>
  </Theme>
</Themes>
"#;
