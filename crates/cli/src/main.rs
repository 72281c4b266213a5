//! Manifest CLI - resolve and emit the app build manifest.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve the manifest via the shared `manifest-config` crate.
//! - Serialize the result (JSON or YAML) to stdout or a file.
//!
//! Does NOT handle:
//! - Manifest resolution semantics (see `crates/config`).
//! - Consuming the manifest; that is the external build tool's job.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide
//!   clap env defaults (e.g. APP_MANIFEST_ROOT).
//! - Logs go to stderr; stdout carries nothing but the serialized manifest.

mod args;

use anyhow::Context;
use args::{Cli, OutputFormat};
use clap::Parser;
use manifest_config::{ManifestResolver, load_dotenv};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env BEFORE CLI parsing so clap env defaults can read .env values
    load_dotenv();

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let resolver = match cli.project_root {
        Some(root) => ManifestResolver::with_project_root(absolutize(root)?),
        None => ManifestResolver::from_process()?,
    };

    let manifest = resolver.resolve();

    let rendered = match cli.output {
        OutputFormat::Json if cli.compact => serde_json::to_string(&manifest)?,
        OutputFormat::Json => serde_json::to_string_pretty(&manifest)?,
        OutputFormat::Yaml => serde_yaml::to_string(&manifest)?,
    };

    match cli.output_file {
        Some(path) => {
            let mut file = std::fs::File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            writeln!(file, "{rendered}")?;
            tracing::info!(path = %path.display(), "wrote manifest");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Anchor a relative project root at the current directory so credential
/// file references always come out absolute.
fn absolutize(root: PathBuf) -> anyhow::Result<PathBuf> {
    if root.is_absolute() {
        Ok(root)
    } else {
        Ok(std::env::current_dir()
            .context("unable to determine current directory")?
            .join(root))
    }
}
