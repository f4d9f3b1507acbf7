//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--short` / `-s`: names-only output
//! - `--json`: machine-readable output
//! - `--color <when>`: ANSI color in table mode
//! - `--quiet` / `-q`: suppress non-error diagnostics
//! - `--debug`: verbose stderr diagnostics
//! - `--completions <shell>`: emit a completion script and exit
//! - `--config <path>`: read presentation defaults from this file

use clap::Parser;
use std::path::PathBuf;

use crate::ui::table::{ColorChoice, Format};

/// git branch with tabular alignment
#[derive(Parser, Debug)]
#[command(name = "git-br")]
#[command(author, version, about)]
#[command(
    long_about = "git branch with tabular alignment.\n\n\
        Reads NUL-delimited branch records on stdin and prints an aligned, \
        indented report of which branches track which other branches as \
        upstream. Branches whose upstream is not in the input (such as a \
        remote-tracking upstream when remotes are not listed) are shown as \
        roots.",
    after_help = "\
INPUT FORMAT:
    One branch per line, seven NUL-separated fields, as produced by:

    git branch --format='%(HEAD)%00%(objectname:short=7)%00%(refname)%00%(refname:short)%00%(upstream)%00%(upstream:short)%00%(upstream:track)'

WORKFLOW EXAMPLES:
    # Aligned, hierarchical branch listing (add as a git alias)
    git branch --format='...' | git-br

    # Branch names only, for piping into a fuzzy finder
    git branch --format='...' | git-br --short | fzf

    # Machine-readable records for scripting
    git branch --format='...' | git-br --json"
)]
pub struct Cli {
    /// Print only the indented short branch names
    #[arg(short, long, conflicts_with = "json")]
    pub short: bool,

    /// Print one JSON object per branch, all fields preserved
    #[arg(long)]
    pub json: bool,

    /// When to use ANSI colors in table output
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Suppress non-error diagnostics
    ///
    /// Reserved: the tool currently emits nothing between debug and error
    /// level, so this flag only pins the verbosity floor. Errors always print.
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug output on stderr
    #[arg(long)]
    pub debug: bool,

    /// Generate a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Read presentation defaults from this file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// The output format requested by flags, if any was given.
    ///
    /// `None` means no format flag was passed and the config file (or the
    /// built-in default) decides.
    pub fn format_flag(&self) -> Option<Format> {
        if self.short {
            Some(Format::Short)
        } else if self.json {
            Some(Format::Json)
        } else {
            None
        }
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
