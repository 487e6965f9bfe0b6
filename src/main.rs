//! easel - colorize lines of text from stdin using regex patterns
//!
//! Usage: easel --config patterns.toml < input.log

use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use easel::config;
use easel::{colorize_stream, EaselError, Result};

/// Colorize lines of text by overlaying terminal styles on regex matches
#[derive(Parser, Debug)]
#[command(name = "easel", version, about)]
struct Cli {
    /// Path to TOML config file (defaults to ~/.easel.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    init_logging();

    if let Err(e) = run(Cli::parse()) {
        // Downstream closed the pipe (e.g. `easel | head`)
        if let EaselError::Io(ref io_err) = e {
            if io_err.kind() == ErrorKind::BrokenPipe {
                return;
            }
        }
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let path = cli
        .config
        .or_else(config::config_path)
        .ok_or(EaselError::NoConfig)?;

    // Fail on a bad config before any input is read
    let table = config::load(&path)?;

    let stdin = io::stdin().lock();
    let stdout = io::BufWriter::new(io::stdout().lock());
    let lines = colorize_stream(&table, stdin, stdout)?;
    debug!(lines, "input exhausted");

    Ok(())
}

/// Log to stderr, filtered by `EASEL_LOG` (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_env("EASEL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
