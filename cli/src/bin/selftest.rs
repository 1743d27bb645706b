use clap::Parser;
use cli::vectors::{Outcome, BLOCK_VECTORS, IGE_VECTORS};
use ige::crypto::aes::ige::Direction;
use log::{error, info, LevelFilter};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run the AES and AES-IGE known-answer tests", long_about = None)]
struct Args {
    /// Only run vectors whose name contains this string
    #[arg(short, long)]
    filter: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

/// Logs the outcome and returns whether it is a failure.
fn report(target: &str, name: &str, direction: Direction, outcome: Outcome) -> bool {
    match outcome {
        Outcome::Ok => {
            info!(target: target, "{name}: {direction:?} ... OK");
            false
        }
        Outcome::Mismatch { expected, actual } => {
            error!(
                target: target,
                "{name}: {direction:?} ... mismatch\nExpected: {}\nActual:   {}",
                hex::encode(expected),
                hex::encode(actual)
            );
            true
        }
        Outcome::Failed(e) => {
            error!(target: target, "{name}: {direction:?} ... failed with error: {e}");
            true
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    simple_logger::SimpleLogger::new()
        .with_level(args.log_level)
        .init()
        .expect("Failed to initialize logger");

    let selected = |name: &str| {
        args.filter
            .as_deref()
            .map_or(true, |filter| name.contains(filter))
    };

    let mut failures = 0usize;
    for direction in [Direction::Encrypt, Direction::Decrypt] {
        for vector in BLOCK_VECTORS.iter().filter(|vector| selected(vector.name)) {
            if report("AES", vector.name, direction, vector.check(direction)) {
                failures += 1;
            }
        }
        for vector in IGE_VECTORS.iter().filter(|vector| selected(vector.name)) {
            if report("IGE", vector.name, direction, vector.check(direction)) {
                failures += 1;
            }
        }
    }

    info!("Had {failures} failure(s)");
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
