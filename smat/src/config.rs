//! Session configuration
//!
//! Output location and formatting choices for a host session. Built with
//! `SessionConfig::new(dir)` or `Default` and refined with `with_*` calls.

use std::path::{Path, PathBuf};

use smat_core::format::constants;
use smat_core::{EntryOrder, Operation};

use crate::error::{Error, Result};

/// Serialization used for result files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `rows=`/`cols=` header plus `(row, col, value)` lines
    #[default]
    Text,
    /// `{ rows, cols, entries }` document
    #[cfg(feature = "serde")]
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => constants::TEXT_EXTENSION,
            #[cfg(feature = "serde")]
            OutputFormat::Json => constants::JSON_EXTENSION,
        }
    }
}

/// Configuration for a host session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Directory result files are written into
    pub result_dir: PathBuf,
    /// Format of result files
    pub output_format: OutputFormat,
    /// Order of entry lines in text output
    pub entry_order: EntryOrder,
    /// Reject loaded matrices with entries outside their dimensions
    pub strict_bounds: bool,
}

impl SessionConfig {
    /// Create config writing into `result_dir`
    pub fn new(result_dir: impl Into<PathBuf>) -> Self {
        Self {
            result_dir: result_dir.into(),
            ..Self::default()
        }
    }

    /// Set the result file format
    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    /// Set the entry order for text output
    pub fn with_entry_order(mut self, entry_order: EntryOrder) -> Self {
        self.entry_order = entry_order;
        self
    }

    /// Enable or disable bounds checking of loaded matrices
    pub fn with_strict_bounds(mut self, strict_bounds: bool) -> Self {
        self.strict_bounds = strict_bounds;
        self
    }

    pub fn result_dir(&self) -> &Path {
        &self.result_dir
    }

    /// Fail unless `result_dir` exists and is a directory
    pub fn ensure_result_dir(&self) -> Result<()> {
        if self.result_dir.is_dir() {
            Ok(())
        } else {
            Err(Error::NotADirectory {
                path: self.result_dir.clone(),
            })
        }
    }

    /// Path the result of `operation` is written to, e.g. `<dir>/sum.txt`
    pub fn result_path(&self, operation: Operation) -> PathBuf {
        self.result_dir
            .join(operation.result_stem())
            .with_extension(self.output_format.extension())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            result_dir: PathBuf::from("."),
            output_format: OutputFormat::Text,
            entry_order: EntryOrder::RowMajor,
            strict_bounds: false,
        }
    }
}
