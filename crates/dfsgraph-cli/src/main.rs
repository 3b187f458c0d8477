use std::io::IsTerminal as _;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod cmd;
mod error;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use crate::error::CliError;

/// Installs the stderr log subscriber.
///
/// `--verbose` and `--quiet` override `RUST_LOG`; without either flag the
/// filter comes from `RUST_LOG`, falling back to `warn`.
fn init_logging(cli: &Cli) {
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let content = io::read_input(cli.command.input(), cli.max_file_size)?;
    let built = cmd::load_graph(&content, cli.max_vertices)?;
    let format = cli.format;

    match &cli.command {
        Command::Show { .. } => cmd::show::run(&built, format),
        Command::Inspect { .. } => cmd::inspect::run(&built, format),
        Command::Dfs { start, .. } => cmd::dfs::run(&built, *start, format),
        Command::Path { from, to, .. } => cmd::path::run(&built, *from, *to, format),
        Command::Cycle { .. } => cmd::cycle::run(&built, format),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let started = Instant::now();
    let result = run(&cli);
    tracing::debug!(elapsed_ms = started.elapsed().as_millis(), "command finished");

    if let Err(e) = result {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}
