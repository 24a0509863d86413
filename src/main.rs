//! Command-line driver: combine two matrix files with `add`, `sub` or `mul`
//!
//! ```bash
//! spmat add a.txt b.txt sum.txt      # writes output/sum.txt
//! spmat mul a.txt b.txt prod.txt --output-dir results
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use spmat::{read_matrix, write_matrix, IntMatrix, Operation, RunConfig, DEFAULT_OUTPUT_DIR};

/// Sparse matrix arithmetic on text matrix files
#[derive(Parser, Debug)]
#[command(name = "spmat")]
#[command(version)]
struct Args {
    /// Operation to perform: add, sub or mul
    operation: String,

    /// Left operand matrix file
    input_1: PathBuf,

    /// Right operand matrix file
    input_2: PathBuf,

    /// Result file name, written inside the output directory
    output: PathBuf,

    /// Directory the result is written under
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn into_config(self) -> RunConfig {
        RunConfig::new(self.operation, self.input_1, self.input_2, self.output)
            .with_output_dir(self.output_dir)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &RunConfig) -> Result<PathBuf> {
    let lhs: IntMatrix = read_matrix(&config.lhs)
        .with_context(|| format!("failed to load {}", config.lhs.display()))?;
    let rhs: IntMatrix = read_matrix(&config.rhs)
        .with_context(|| format!("failed to load {}", config.rhs.display()))?;

    // Inputs are validated before the operation name, so a bad file is
    // reported even when the operation is also wrong
    let operation: Operation = config.operation.parse()?;
    tracing::info!(
        %operation,
        lhs = ?lhs.shape(),
        rhs = ?rhs.shape(),
        "applying operation"
    );

    let result = operation.apply(&lhs, &rhs)?;

    let output_path = config.output_path();
    write_matrix(&output_path, &result)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    Ok(output_path)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.into_config();
    match run(&config) {
        Ok(path) => {
            println!(
                "Operation {} completed. Result saved to {}",
                config.operation,
                path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
