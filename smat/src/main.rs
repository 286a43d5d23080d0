//! smat: add, subtract or multiply two sparse matrix files.
//!
//! With `--op` the operation runs once; otherwise an interactive menu is
//! read from stdin until "4" or end of input.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use smat::{EntryOrder, Operation, OutputFormat, Session, SessionConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "smat",
    version,
    about = "Sparse integer matrix arithmetic on text matrix files"
)]
struct Cli {
    /// First operand (left-hand side)
    matrix1: PathBuf,

    /// Second operand (right-hand side)
    matrix2: PathBuf,

    /// Existing directory result files are written into
    result_dir: PathBuf,

    /// Run a single operation instead of the interactive menu
    #[arg(long, value_enum)]
    op: Option<OpArg>,

    /// Result file format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Write entries in map order instead of sorted row-major order
    #[arg(long)]
    storage_order: bool,

    /// Reject input matrices with entries outside their declared dimensions
    #[arg(long)]
    strict: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum OpArg {
    Add,
    Subtract,
    Multiply,
}

impl From<OpArg> for Operation {
    fn from(op: OpArg) -> Self {
        match op {
            OpArg::Add => Operation::Add,
            OpArg::Subtract => Operation::Subtract,
            OpArg::Multiply => Operation::Multiply,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let entry_order = if cli.storage_order {
        EntryOrder::Storage
    } else {
        EntryOrder::RowMajor
    };
    let config = SessionConfig::new(&cli.result_dir)
        .with_output_format(cli.format.into())
        .with_entry_order(entry_order)
        .with_strict_bounds(cli.strict);
    config.ensure_result_dir()?;

    let session: Session = Session::load(&cli.matrix1, &cli.matrix2, config)
        .context("Error loading matrices")?;

    match cli.op {
        Some(op) => {
            let operation = Operation::from(op);
            let path = session.run(operation)?;
            println!("{} result saved to {}", operation.title(), path.display());
        }
        None => session.run_interactive(io::stdin().lock(), io::stdout().lock())?,
    }

    Ok(())
}
