//! cli
//!
//! Command-line interface layer for git-br.
//!
//! # Responsibilities
//!
//! - Parse flags and resolve them against the config file
//! - Read stdin, run the pipeline, write the rendered report to stdout
//! - Does NOT interpret record contents itself
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, resolves presentation
//! choices (flags override config), and delegates the transform to
//! [`crate::pipeline`] and rendering to [`crate::ui::table`].

pub mod args;

pub use args::{Cli, Shell};

use std::io::{Read, Write};

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::config::Config;
use crate::pipeline;
use crate::ui::output::Verbosity;
use crate::ui::table;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    if let Some(shell) = cli.completions {
        return completions(shell);
    }

    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    let config = Config::load(cli.config.as_deref())?;

    // CLI flags take precedence over config file values.
    let format = cli.format_flag().unwrap_or_else(|| config.format());
    let color = cli.color.unwrap_or_else(|| config.color()).enabled();

    // Input is fully read before the transform starts; there is no streaming.
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let records = pipeline::run(&input, verbosity)?;
    let rendered =
        table::render(&records, format, color).context("failed to serialize records")?;

    // Propagate write failures (e.g. a closed pipe) as errors, never a panic.
    std::io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("failed to write output")?;

    Ok(())
}

/// Generate a shell completion script on stdout.
fn completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    match shell {
        Shell::Bash => {
            generate(shells::Bash, &mut cmd, &name, &mut std::io::stdout());
        }
        Shell::Zsh => {
            generate(shells::Zsh, &mut cmd, &name, &mut std::io::stdout());
        }
        Shell::Fish => {
            generate(shells::Fish, &mut cmd, &name, &mut std::io::stdout());
        }
        Shell::PowerShell => {
            generate(shells::PowerShell, &mut cmd, &name, &mut std::io::stdout());
        }
    }

    Ok(())
}
