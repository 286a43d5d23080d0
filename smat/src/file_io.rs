//! File I/O for text matrices
//!
//! Reads stream a file line by line through the core decoder; writes go
//! through a buffered writer that is flushed before returning. Handles are
//! closed on every exit path, and a failed read never yields a partial
//! matrix.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use smat_core::{EntryOrder, MatrixDecoder, MatrixElement, SparseMatrix, TextEncoder};
use tracing::debug;

use crate::error::{Error, Result};

/// Entry points for loading and storing matrix files
pub struct MatrixFile;

impl MatrixFile {
    /// Load a text matrix from `path`
    pub fn read<T: MatrixElement, P: AsRef<Path>>(path: P) -> Result<SparseMatrix<T>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let matrix = Self::read_from(BufReader::new(file), path)?;

        debug!(
            path = %path.display(),
            rows = matrix.rows(),
            cols = matrix.cols(),
            nnz = matrix.nnz(),
            data_type = %T::data_type(),
            "loaded matrix"
        );
        Ok(matrix)
    }

    /// Decode a text matrix from any buffered reader
    ///
    /// `origin` labels errors; it does not need to exist on disk.
    pub fn read_from<T: MatrixElement, R: BufRead>(
        reader: R,
        origin: &Path,
    ) -> Result<SparseMatrix<T>> {
        let mut decoder = MatrixDecoder::new();
        for line in reader.lines() {
            let line = line.map_err(|e| Error::io(origin, e))?;
            decoder
                .process_line(&line)
                .map_err(|e| Error::in_file(origin, e))?;
        }
        decoder.finalize().map_err(|e| Error::in_file(origin, e))
    }

    /// Store `matrix` at `path` in text form, replacing any existing file
    pub fn write<T: MatrixElement, P: AsRef<Path>>(
        path: P,
        matrix: &SparseMatrix<T>,
        order: EntryOrder,
    ) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut writer = BufWriter::new(file);
        Self::write_to(&mut writer, matrix, order).map_err(|e| Error::io(path, e))?;
        writer.flush().map_err(|e| Error::io(path, e))?;

        debug!(path = %path.display(), nnz = matrix.nnz(), ?order, "stored matrix");
        Ok(())
    }

    /// Encode `matrix` in text form into any writer
    pub fn write_to<T: MatrixElement, W: Write>(
        writer: &mut W,
        matrix: &SparseMatrix<T>,
        order: EntryOrder,
    ) -> std::io::Result<()> {
        write!(writer, "{}", TextEncoder::new(matrix, order))
    }

    /// Store `matrix` at `path` as a JSON document
    #[cfg(feature = "serde")]
    pub fn write_json<T, P>(path: P, matrix: &SparseMatrix<T>) -> Result<()>
    where
        T: MatrixElement + serde::Serialize,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, matrix).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        writeln!(writer).map_err(|e| Error::io(path, e))?;
        writer.flush().map_err(|e| Error::io(path, e))?;

        debug!(path = %path.display(), nnz = matrix.nnz(), "stored matrix as json");
        Ok(())
    }

    /// Load a matrix previously stored with [`MatrixFile::write_json`]
    #[cfg(feature = "serde")]
    pub fn read_json<T, P>(path: P) -> Result<SparseMatrix<T>>
    where
        T: MatrixElement + serde::de::DeserializeOwned,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
