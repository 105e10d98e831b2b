//! PIN Cracker - CLI
//!
//! Mastermind-style solver for numeric PIN codes. Think of a PIN and score
//! the solver's guesses, or let it crack a known secret.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pin_cracker::{
    commands::{crack_secret, run_benchmark, run_play},
    core::Code,
    output::{print_benchmark_result, print_crack_result},
};

#[derive(Parser)]
#[command(
    name = "pin_cracker",
    about = "Mastermind-style solver for numeric PIN codes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use the exhaustive minimax strategy instead of the sampling heuristic
    #[arg(short, long, global = true)]
    optimal: bool,

    /// PIN length in digits
    #[arg(short, long, global = true, default_value_t = 4)]
    length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Think of a PIN and score the solver's guesses (default)
    Play,

    /// Crack a known secret and print the deduction trace
    Crack {
        /// Secret PIN; a random one of the configured length is drawn when omitted
        secret: Option<String>,

        /// Show per-attempt candidate counts and scoring metrics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Measure attempt counts across an evenly spaced sweep of secrets
    Benchmark {
        /// Number of secrets to test
        #[arg(short = 'n', long, default_value_t = 50)]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(cli.length, cli.optimal)?,
        Commands::Crack { secret, verbose } => {
            run_crack_command(secret.as_deref(), cli.length, cli.optimal, verbose)?;
        }
        Commands::Benchmark { count } => {
            let result = run_benchmark(cli.length, count, cli.optimal, true)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}

fn run_crack_command(
    secret: Option<&str>,
    length: usize,
    optimal: bool,
    verbose: bool,
) -> Result<()> {
    let secret = match secret {
        Some(text) => Code::parse(text)?,
        None => random_secret(length)?,
    };

    let result = crack_secret(&secret, optimal)?;
    print_crack_result(&result, verbose);
    Ok(())
}

/// Draw a demo secret when none was supplied
fn random_secret(length: usize) -> Result<Code> {
    use rand::Rng;

    let mut rng = rand::rng();
    let text: String = (0..length)
        .map(|_| char::from(b'0' + rng.random_range(0..10)))
        .collect();

    Ok(Code::parse(&text)?)
}
