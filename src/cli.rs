//! Command-line interface implementation for pagegen.
//! Provides argument parsing using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::component::SetKind;

/// Which component sets to generate.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Admin components under src/admin
    Admin,
    /// Public pages under src/pages
    Public,
    /// Both sets
    All,
}

impl Selection {
    pub fn kinds(self) -> Vec<SetKind> {
        match self {
            Selection::Admin => vec![SetKind::Admin],
            Selection::Public => vec![SetKind::Public],
            Selection::All => vec![SetKind::Admin, SetKind::Public],
        }
    }
}

/// Command-line arguments structure for pagegen.
#[derive(Parser, Debug)]
#[command(author, version, about = "pagegen: scaffold placeholder page components", long_about = None)]
pub struct Args {
    /// Component set to generate
    #[arg(value_enum, value_name = "SET", default_value_t = Selection::All)]
    pub set: Selection,

    /// Directory the set directories are created under
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Manifest overriding the built-in sets
    /// (defaults to pagegen.json, pagegen.yml or pagegen.yaml in the root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only generate files whose name matches this glob (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub only: Vec<String>,

    /// Stop at the first failed file instead of continuing
    #[arg(long)]
    pub fail_fast: bool,

    /// Render everything but write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Ask before overwriting existing files
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments, exiting with clap's error handling on failure.
pub fn get_args() -> Args {
    Args::parse()
}
