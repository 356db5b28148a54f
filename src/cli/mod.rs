//! Command-line interface for web-pathfix
//!
//! With no arguments the configured build artifact (`dist/index.html` by
//! default) is rewritten in place.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod fix;
mod utils;

/// Normalize backslash resource paths in exported web build markup
#[derive(Parser)]
#[command(name = "web-pathfix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    fix: fix::FixArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    fix::run(cli.fix)
}
