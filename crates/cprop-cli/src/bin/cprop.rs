use anyhow::{Context, Result};
use clap::Parser;

use cprop_cli::args::CliArgs;
use cprop_cli::{driver, tracing_config};

fn main() -> Result<()> {
    // Initialize tracing if CPROP_LOG or RUST_LOG is set.
    // Supports CPROP_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    driver::run(&args, &cwd)
}
