//! Host session: two loaded operands and where results go
//!
//! A `Session` is the explicit context a host passes around instead of
//! global state. It runs one operation at a time and persists each result
//! under the configured directory, either on request or from the
//! interactive menu.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use smat_core::{MatrixElement, Operation, SparseMatrix};
use tracing::{info, warn};

use crate::config::{OutputFormat, SessionConfig};
use crate::error::{Error, Result};
use crate::file_io::MatrixFile;

/// One entry of the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Operation),
    Exit,
}

impl MenuChoice {
    /// Parse a trimmed menu selection ("1" to "4")
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Run(Operation::Add)),
            "2" => Some(MenuChoice::Run(Operation::Subtract)),
            "3" => Some(MenuChoice::Run(Operation::Multiply)),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Element types a session can persist in every configured output format
#[cfg(feature = "serde")]
pub trait PersistElement: MatrixElement + serde::Serialize {}
#[cfg(feature = "serde")]
impl<T: MatrixElement + serde::Serialize> PersistElement for T {}

/// Element types a session can persist in every configured output format
#[cfg(not(feature = "serde"))]
pub trait PersistElement: MatrixElement {}
#[cfg(not(feature = "serde"))]
impl<T: MatrixElement> PersistElement for T {}

const MENU: &str = "\nChoose an operation:\n1. Add\n2. Subtract\n3. Multiply\n4. Exit";

/// Two operands plus output configuration
#[derive(Debug, Clone)]
pub struct Session<T: MatrixElement = i32> {
    left: SparseMatrix<T>,
    right: SparseMatrix<T>,
    config: SessionConfig,
}

impl<T: MatrixElement> Session<T> {
    /// Build a session from matrices already in memory
    pub fn new(left: SparseMatrix<T>, right: SparseMatrix<T>, config: SessionConfig) -> Self {
        Self {
            left,
            right,
            config,
        }
    }

    /// Load both operands from text files
    ///
    /// With `strict_bounds` set, a matrix holding entries outside its
    /// declared dimensions is rejected.
    pub fn load(left_path: &Path, right_path: &Path, config: SessionConfig) -> Result<Self> {
        let left = Self::load_operand(left_path, &config)?;
        let right = Self::load_operand(right_path, &config)?;
        info!(
            left = ?left.dimensions(),
            right = ?right.dimensions(),
            "loaded operands"
        );
        Ok(Self::new(left, right, config))
    }

    fn load_operand(path: &Path, config: &SessionConfig) -> Result<SparseMatrix<T>> {
        let matrix = MatrixFile::read(path)?;
        if config.strict_bounds {
            matrix
                .check_bounds()
                .map_err(|e| Error::in_file(path, e))?;
        }
        Ok(matrix)
    }

    pub fn left(&self) -> &SparseMatrix<T> {
        &self.left
    }

    pub fn right(&self) -> &SparseMatrix<T> {
        &self.right
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Compute `left <op> right` without persisting it
    pub fn compute(&self, operation: Operation) -> Result<SparseMatrix<T>> {
        Ok(operation.apply(&self.left, &self.right)?)
    }

    /// Compute `left <op> right` and write it to the configured result path
    pub fn run(&self, operation: Operation) -> Result<PathBuf>
    where
        T: PersistElement,
    {
        let result = self.compute(operation)?;
        let path = self.config.result_path(operation);
        match self.config.output_format {
            OutputFormat::Text => MatrixFile::write(&path, &result, self.config.entry_order)?,
            #[cfg(feature = "serde")]
            OutputFormat::Json => MatrixFile::write_json(&path, &result)?,
        }
        info!(
            %operation,
            path = %path.display(),
            rows = result.rows(),
            cols = result.cols(),
            nnz = result.nnz(),
            "stored result"
        );
        Ok(path)
    }

    /// Drive the numbered menu until "4", end of input, or an I/O failure
    ///
    /// Operation errors are reported on `output` and the loop continues.
    pub fn run_interactive<R: BufRead, W: Write>(&self, input: R, mut output: W) -> io::Result<()>
    where
        T: PersistElement,
    {
        let mut lines = input.lines();
        loop {
            writeln!(output, "{MENU}")?;
            output.flush()?;

            let Some(line) = lines.next().transpose()? else {
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Run(operation)) => match self.run(operation) {
                    Ok(path) => writeln!(
                        output,
                        "{} result saved to {}",
                        operation.title(),
                        path.display()
                    )?,
                    Err(err) => {
                        warn!(%operation, category = %err.category(), "operation failed");
                        writeln!(output, "Error: {err}")?;
                    }
                },
                Some(MenuChoice::Exit) => {
                    writeln!(output, "Exiting.")?;
                    return Ok(());
                }
                None => writeln!(output, "Invalid choice. Please try again.")?,
            }
        }
    }
}
