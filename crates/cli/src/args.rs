//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not resolve the manifest (see the `manifest-config` crate).
//! - Does not serialize or write output (see `main`).

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "manifest-cli")]
#[command(about = "Resolve the app build manifest from the environment", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  manifest-cli\n  manifest-cli --project-root ./mobile --output yaml\n  APP_NAME='Example App' NODE_ENV=production manifest-cli --output-file app.json\n"
)]
pub struct Cli {
    /// Project directory containing the google-services/ credential files
    #[arg(long, value_name = "DIR", env = "APP_MANIFEST_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// Output file path (writes the manifest to a file instead of stdout)
    #[arg(long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed (ignored for yaml)
    #[arg(long)]
    pub compact: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}
