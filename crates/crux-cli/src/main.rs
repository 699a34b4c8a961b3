use anyhow::Context;
use clap::Parser;
use crux_config::CruxConfig;

mod cli;
mod commands;
mod output;

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("crux error: {error:#}");
            std::process::exit(1);
        }
    }
}

/// Returns `false` when the command ran but the input has errors.
fn run() -> anyhow::Result<bool> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = match &cli.config {
        Some(path) => CruxConfig::load_from(path),
        None => CruxConfig::load_with_dotenv(),
    }
    .context("failed to load crux configuration")?;

    match &cli.command {
        cli::Commands::Parse(args) => commands::parse(args, &config).map(|()| true),
        cli::Commands::Check(args) => commands::check(args, &config),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CRUX_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
