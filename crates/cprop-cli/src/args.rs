use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the cprop binary.
#[derive(Parser, Debug)]
#[command(
    name = "cprop",
    version,
    about = "Lower computed object-literal keys to ES5"
)]
pub struct CliArgs {
    /// Program to lower: a JSON array of IR statements.
    pub input: PathBuf,

    /// Path to a cprop.json config file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Assign init properties instead of calling `_defineProperty`.
    #[arg(long)]
    pub loose: bool,

    /// Do not print helper definitions ahead of the program.
    #[arg(long = "noHelpers", alias = "no-helpers")]
    pub no_helpers: bool,

    /// Write output to this file instead of stdout.
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,
}
