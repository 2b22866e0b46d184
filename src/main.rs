//! ghost-hex - hide ASCII in plain sight
//!
//! A CLI tool that hides ASCII payloads in text as trailing Unicode
//! variation selectors, and recovers them again.

mod commands;

use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::{Builder, Env};
use log::LevelFilter;

use commands::{CommandExecutor, DecodeCommand, EncodeCommand};

/// ghost-hex: ASCII <-> VS17-VS144 trailing variation selectors
#[derive(Parser)]
#[command(name = "ghost-hex")]
#[command(version)]
#[command(about = "ghost-hex: ASCII <-> VS17-VS144 trailing variation selectors")]
#[command(long_about = None)]
struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode payload into trailing variation selectors
    Encode(EncodeCommand),

    /// Decode trailing variation selectors
    Decode(DecodeCommand),
}

impl Commands {
    fn executor(&self) -> &dyn CommandExecutor {
        match self {
            Commands::Encode(cmd) => cmd,
            Commands::Decode(cmd) => cmd,
        }
    }
}

/// Initialize logging on stderr, `warn` by default, `debug` with --verbose.
///
/// `RUST_LOG` takes precedence over both. stdout carries only command output.
fn init_logger(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    Builder::from_env(Env::default().default_filter_or(default_level.as_str()))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command.executor().execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
