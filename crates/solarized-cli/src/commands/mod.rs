//! CLI command definitions and handlers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::warn;

use solarized_core::config::Config;
use solarized_core::{FormatVersion, SchemeVariant};

pub mod console;
pub mod generate;
pub mod template;

/// Load configuration, from `path` if given.
///
/// An explicit path must parse cleanly. The default location falls back to
/// defaults when the file can't be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::load().unwrap_or_else(|e| {
            warn!("Ignoring configuration file: {e}");
            Config::default()
        })),
    }
}

/// Solarized - generate dark and light Visual Studio themes from one template
#[derive(Parser, Debug)]
#[command(name = "solarized")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Create the template from an existing theme instead of generating themes
    #[arg(short = 'c', long)]
    pub create_template: bool,

    /// Template document [default: VSTheme.Template.<version>.xml]
    #[arg(short = 't', long, value_name = "PATH")]
    pub template_path: Option<PathBuf>,

    /// Dark theme document [default: Solarized <version> (Dark).VSTheme]
    #[arg(short = 'd', long, value_name = "PATH")]
    pub dark_theme_path: Option<PathBuf>,

    /// Light theme document [default: Solarized <version> (Light).VSTheme]
    #[arg(short = 'l', long, value_name = "PATH")]
    pub light_theme_path: Option<PathBuf>,

    /// Theme format version
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Configuration file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the console color table as a .reg script and exit
    #[arg(long, value_enum, value_name = "VARIANT")]
    pub console_table: Option<Option<VariantArg>>,

    /// Output the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Show debug output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Print help
    #[arg(short = 'h', long, short_alias = '?', action = ArgAction::Help)]
    pub help: Option<bool>,
}

/// Theme format versions accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Visual Studio 2015
    #[value(name = "2015")]
    Vs2015,
    /// Visual Studio 2017
    #[value(name = "2017")]
    Vs2017,
}

impl From<FormatArg> for FormatVersion {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Vs2015 => Self::Vs2015,
            FormatArg::Vs2017 => Self::Vs2017,
        }
    }
}

/// Scheme variants accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// Dark background
    Dark,
    /// Light background
    Light,
}

impl From<VariantArg> for SchemeVariant {
    fn from(variant: VariantArg) -> Self {
        match variant {
            VariantArg::Dark => Self::Dark,
            VariantArg::Light => Self::Light,
        }
    }
}

/// Paths for one run, after applying flags over the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Template document
    pub template: PathBuf,
    /// Dark theme document
    pub dark_theme: PathBuf,
    /// Light theme document
    pub light_theme: PathBuf,
}

impl Cli {
    /// Apply flags that override configuration values.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.general.format = format.into();
        }
        if let Some(Some(variant)) = self.console_table {
            config.console.variant = variant.into();
        }
    }

    /// Resolve the three document paths: flag, then config, then default name.
    pub fn paths(&self, config: &Config) -> ResolvedPaths {
        ResolvedPaths {
            template: self
                .template_path
                .clone()
                .unwrap_or_else(|| config.template_path()),
            dark_theme: self
                .dark_theme_path
                .clone()
                .unwrap_or_else(|| config.dark_theme_path()),
            light_theme: self
                .light_theme_path
                .clone()
                .unwrap_or_else(|| config.light_theme_path()),
        }
    }
}

/// Run whichever action the flags select.
pub fn run(cli: &Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    cli.apply_to(&mut config);

    if cli.console_table.is_some() {
        return console::run(config.console.variant, cli.json);
    }

    let paths = cli.paths(&config);
    if cli.create_template {
        template::run(&paths, cli.json)
    } else {
        generate::run(&paths, &config.format(), cli.json)
    }
}
