//! godocmd — generate markdown documentation for Go packages.
//!
//! - **go mode** (default): `godocmd -p ./pkg/server -o docs/server.md`
//! - **listing mode**: `go doc -all ./pkg | godocmd -i -`

use anyhow::{Context, Result};
use clap::Parser;
use godocmd::{godoc, parser, render};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "godocmd",
    version,
    about = "Generate markdown documentation for Go packages"
)]
struct Cli {
    /// Package path passed to `go doc -all`
    #[arg(short = 'p', long, default_value = ".")]
    path: String,

    /// Read a saved `go doc -all` listing instead of running go ("-" for stdin)
    #[arg(short = 'i', long)]
    input: Option<String>,

    /// Output file, or a directory to write `<package>.<ext>` into.
    /// If omitted, writes to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), html, json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Enable debug messages
    #[arg(short = 'd', long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let started = Instant::now();

    // Fail on a bad format before spending time on go doc
    let renderer = render::create_renderer(&cli.format)?;

    let raw = read_listing(&cli)?;
    let pkg = parser::parse(&raw).context("failed to parse go doc output")?;
    let document = renderer.render(&pkg)?;

    match cli.output {
        Some(ref target) => {
            let path = if target.is_dir() {
                target.join(format!("{}.{}", pkg.name, renderer.file_extension()))
            } else {
                target.clone()
            };
            fs::write(&path, &document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::debug!(path = %path.display(), "wrote document");
        }
        None => print!("{}", document),
    }

    tracing::info!(
        package = %pkg.name,
        elapsed = ?started.elapsed(),
        "successfully generated docs"
    );
    Ok(())
}

/// Logs go to stderr so stdout carries only the document.
fn init_tracing(debug: bool) {
    let default = if debug { "godocmd=debug" } else { "godocmd=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_listing(cli: &Cli) -> Result<String> {
    match cli.input.as_deref() {
        Some("-") => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
        Some(file) => {
            fs::read_to_string(file).with_context(|| format!("failed to read {}", file))
        }
        None => Ok(godoc::fetch(&cli.path)?),
    }
}
