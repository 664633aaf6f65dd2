//! File-level template and theme generation.
//!
//! These helpers wrap the streaming transforms in [`crate::template`] with
//! path handling: missing inputs are reported as [`Error::NotFound`], and
//! every output is staged in a temporary file next to its destination and
//! renamed into place only once the whole document has been written. A
//! failed run leaves existing destinations untouched.
//!
//! ## Example
//!
//! ```rust,ignore
//! use solarized_core::format::ThemeFormat;
//! use solarized_core::generator;
//!
//! let format = ThemeFormat::VS2017;
//! generator::write_themes(
//!     "VSTheme.Template.2017.xml".as_ref(),
//!     format.dark_theme_file_name().as_ref(),
//!     format.light_theme_file_name().as_ref(),
//!     &format,
//! )?;
//! ```

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::format::ThemeFormat;
use crate::scheme::{ColorScheme, SchemeVariant};
use crate::template::{extract, synthesize, ExtractSummary, SynthesisSummary};

/// The concrete theme a template should be extracted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    /// Path of the theme document
    pub path: PathBuf,
    /// Which scheme the theme was generated with
    pub variant: SchemeVariant,
}

/// Pick the theme to extract a template from.
///
/// The dark theme is preferred. The light theme is used only when the dark
/// one does not exist.
pub fn template_source(dark_theme: &Path, light_theme: &Path) -> Result<TemplateSource> {
    if dark_theme.exists() {
        Ok(TemplateSource {
            path: dark_theme.to_path_buf(),
            variant: SchemeVariant::Dark,
        })
    } else if light_theme.exists() {
        Ok(TemplateSource {
            path: light_theme.to_path_buf(),
            variant: SchemeVariant::Light,
        })
    } else {
        Err(Error::NotFound(dark_theme.to_path_buf()))
    }
}

/// Extract a template from the theme at `source_theme` into `template`.
pub fn write_template(
    source_theme: &Path,
    template: &Path,
    scheme: &ColorScheme,
) -> Result<ExtractSummary> {
    let reader = open_input(source_theme)?;
    let mut staged = stage_output(template)?;

    let summary = {
        let mut out = BufWriter::new(staged.as_file_mut());
        let summary = extract(reader, &mut out, scheme)?;
        out.flush()?;
        summary
    };

    commit(staged, template)?;

    info!(
        source = %source_theme.display(),
        template = %template.display(),
        scheme = scheme.name(),
        colors = summary.colors(),
        "Wrote template"
    );

    Ok(summary)
}

/// Generate the dark and light themes from the template at `template`.
///
/// Both documents are written in full before either destination is
/// touched. The dark theme is moved into place first. If moving the light
/// theme then fails, the previous dark theme is restored, or the new one is
/// removed if there was none.
pub fn write_themes(
    template: &Path,
    dark_theme: &Path,
    light_theme: &Path,
    format: &ThemeFormat,
) -> Result<SynthesisSummary> {
    let reader = open_input(template)?;
    let mut dark_staged = stage_output(dark_theme)?;
    let mut light_staged = stage_output(light_theme)?;

    let summary = {
        let mut dark_out = BufWriter::new(dark_staged.as_file_mut());
        let mut light_out = BufWriter::new(light_staged.as_file_mut());
        let summary = synthesize(
            reader,
            &mut dark_out,
            &mut light_out,
            format,
            &ColorScheme::DARK,
            &ColorScheme::LIGHT,
        )?;
        dark_out.flush()?;
        light_out.flush()?;
        summary
    };

    let previous_dark = back_up(dark_theme)?;
    commit(dark_staged, dark_theme)?;
    if let Err(e) = commit(light_staged, light_theme) {
        roll_back(previous_dark, dark_theme);
        return Err(e);
    }

    info!(
        template = %template.display(),
        dark = %dark_theme.display(),
        light = %light_theme.display(),
        substituted = summary.substituted,
        "Wrote themes"
    );

    Ok(summary)
}

fn open_input(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::NotFound(path.to_path_buf())),
        Err(e) => Err(e.into()),
    }
}

fn stage_output(destination: &Path) -> Result<NamedTempFile> {
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    Ok(NamedTempFile::new_in(dir)?)
}

fn commit(staged: NamedTempFile, destination: &Path) -> Result<()> {
    debug!(
        staged = %staged.path().display(),
        destination = %destination.display(),
        "Moving staged output into place"
    );
    staged.persist(destination).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

/// Copy an existing destination aside so it can be restored.
fn back_up(destination: &Path) -> Result<Option<NamedTempFile>> {
    if !destination.exists() {
        return Ok(None);
    }
    let backup = stage_output(destination)?;
    fs::copy(destination, backup.path())?;
    Ok(Some(backup))
}

fn roll_back(backup: Option<NamedTempFile>, destination: &Path) {
    let restored = match backup {
        Some(backup) => commit(backup, destination),
        None => fs::remove_file(destination).map_err(Error::from),
    };
    match restored {
        Ok(()) => warn!(destination = %destination.display(), "Rolled back partial output"),
        Err(e) => warn!(destination = %destination.display(), "Failed to roll back output: {e}"),
    }
}
