//! Footprint - carbon footprint quiz in the terminal
//!
//! Asks a short lifestyle quiz, scores it into a daily footprint estimate
//! and keeps the last results around for the action plan view.

mod cli;
mod render;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = cli::Cli::parse();
    cli::run(cli)
}
