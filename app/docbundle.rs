//! Command-line interface for docbundle.
//!
//! Scans a directory and writes `doc/doc.md` (or `--out`) bundling its text
//! sources and PNG images.

use clap::Parser;
use docbundle::{BundleBuilder, BundleError, generate};
use std::path::PathBuf;
use std::process::exit;

/// docbundle — bundle repository docs into one Markdown file
#[derive(Parser, Debug)]
#[command(name = "docbundle", version, about, long_about = None)]
struct Cli {
    /// Root folder to scan (default: the directory containing this executable)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Output markdown path (default: <root>/doc/doc.md)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn default_root() -> Result<PathBuf, BundleError> {
    let exe = std::env::current_exe().map_err(BundleError::CurrentExe)?;
    exe.parent()
        .map(|dir| dir.to_path_buf())
        .ok_or_else(|| BundleError::NotADirectory(exe.clone()))
}

fn run(cli: Cli) -> Result<PathBuf, BundleError> {
    let root = match cli.root {
        Some(root) => root,
        None => default_root()?,
    };
    let mut builder = BundleBuilder::new(root);
    if let Some(out) = cli.out {
        builder = builder.output(out);
    }
    generate(&builder.build())
}

#[cfg(feature = "logging")]
fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    #[cfg(feature = "logging")]
    setup_tracing();
    #[cfg(feature = "logging")]
    tracing::debug!("Parsed CLI arguments: {cli:?}");

    match run(cli) {
        Ok(out) => println!("Documentation updated: Created '{}'", out.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
