//! Solarized CLI - Visual Studio theme generator
//!
//! Keeps a single template and generates the dark and light Solarized
//! themes from it.
//!
//! ## Quick Start
//!
//! ```bash
//! # Turn the current dark theme into a template
//! solarized -c
//!
//! # Regenerate both themes after editing the template
//! solarized
//!
//! # Same for the 2015 format, with an explicit template
//! solarized --format 2015 -t templates/VSTheme.Template.2015.xml
//! ```

#![allow(clippy::doc_markdown)]

use std::process::ExitCode;

use clap::Parser;

mod commands;
pub mod ui;

use commands::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match commands::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn,solarized=info,solarized_core=info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
