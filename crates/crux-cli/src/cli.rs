use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use crux_config::BackendKind;

/// Top-level CLI parser for the `crux` binary.
#[derive(Debug, Parser)]
#[command(
    name = "crux",
    version,
    about = "Extract the item structure of a Rust source file"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file layered over `.crux/config.toml`
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a file and print the result as JSON
    Parse(ParseArgs),
    /// Print diagnostics; exit 1 if the file has errors
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Rust source file, or `-` for stdin
    pub file: PathBuf,

    /// Name of the parsed crate
    #[arg(long)]
    pub crate_name: Option<String>,

    #[command(flatten)]
    pub extraction: ExtractionArgs,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Rust source file, or `-` for stdin
    pub file: PathBuf,

    /// Grammar backend
    #[arg(long, value_enum)]
    pub backend: Option<BackendArg>,
}

#[derive(Debug, Args)]
pub struct ExtractionArgs {
    /// Grammar backend
    #[arg(long, value_enum)]
    pub backend: Option<BackendArg>,

    /// Leave out private items
    #[arg(long)]
    pub no_private: bool,

    /// Leave out doc comments
    #[arg(long)]
    pub no_docs: bool,

    /// Deepest inline module to descend into
    #[arg(long)]
    pub max_depth: Option<usize>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum BackendArg {
    Bundled,
    Standalone,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Bundled => Self::Bundled,
            BackendArg::Standalone => Self::Standalone,
        }
    }
}
