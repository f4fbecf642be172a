use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

/// Vigenère key length guesser based on the Measure of Roughness (MR).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score candidate key lengths for a ciphertext file
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Vigenère-encrypt a plaintext file to build test fixtures
    Encrypt(cmd::encrypt::EncryptArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, matches.subcommand_matches("analyze")),
        Commands::Encrypt(args) => cmd::encrypt::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
