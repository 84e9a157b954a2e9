use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use spmx::{compute_files, prompt_operation, run, Config, Error, Matrix, MatrixFile, MatrixSummary};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "SPMX - Add, subtract and multiply sparse integer matrix files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Combine two matrix files and write the result
    Compute {
        /// First operand
        left: PathBuf,

        /// Second operand
        right: PathBuf,

        /// Operation: 1/2/3, +/-/*, or add/sub/mul. Prompts when omitted
        #[arg(long)]
        op: Option<String>,

        /// Result path (default: $SPMX_OUTPUT or ./output/output.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show dimensions and fill of a matrix file
    Info {
        path: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a matrix file
    Check { path: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config);

    let outcome = match cli.command {
        Commands::Compute {
            left,
            right,
            op,
            output,
        } => {
            let config = match output {
                Some(path) => config.with_output_path(path),
                None => config,
            };
            handle_compute(&left, &right, op.as_deref(), &config)
        }
        Commands::Info { path, json } => handle_info(&path, json),
        Commands::Check { path } => handle_check(&path),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over the configured filter
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn handle_compute(
    left: &Path,
    right: &Path,
    selector: Option<&str>,
    config: &Config,
) -> Result<(), Error> {
    let output = &config.output_path;
    let result: Matrix = match selector {
        Some(selector) => run(selector, left, right, output)?,
        None => {
            let op = prompt_operation(io::stdin().lock(), io::stdout().lock())?;
            compute_files(op, left, right, output)?
        }
    };

    println!("\nDone: {} non-zero elements", result.nnz());
    println!("Result written to {}", output.display());
    Ok(())
}

fn handle_info(path: &Path, json: bool) -> Result<(), Error> {
    let matrix: Matrix = MatrixFile::read(path)?;
    let summary = MatrixSummary::of(&matrix);

    if json {
        print_json(&summary)?;
    } else {
        println!("Matrix Info:");
        println!("  Path: {}", path.display());
        for line in summary.to_string().lines() {
            println!("  {line}");
        }
    }
    Ok(())
}

#[cfg(feature = "serde")]
fn print_json(summary: &MatrixSummary) -> Result<(), Error> {
    println!("{}", summary.to_json()?);
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn print_json(_summary: &MatrixSummary) -> Result<(), Error> {
    Err(Error::Config(
        "JSON output requires the 'serde' feature".to_string(),
    ))
}

fn handle_check(path: &Path) -> Result<(), Error> {
    let matrix: Matrix = MatrixFile::read(path)?;
    println!(
        "{}: ok ({} x {}, {} non-zero)",
        path.display(),
        matrix.rows(),
        matrix.cols(),
        matrix.nnz()
    );
    Ok(())
}
