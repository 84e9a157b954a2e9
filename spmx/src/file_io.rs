//! File I/O for encoded matrices
//!
//! This module reads and writes sparse matrices to/from files in the text
//! encoding. Handles are scoped to each call and closed on every exit path.

use std::{
    fs::{self, File},
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use spmx_core::{decode, encode, Matrix, MatrixElement};
use tracing::debug;

use crate::error::{Error, Result};

/// Path-bound handle for an encoded matrix file
#[derive(Debug, Clone)]
pub struct MatrixFile {
    path: PathBuf,
}

impl MatrixFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the matrix stored at `path`
    pub fn read<T: MatrixElement, P: AsRef<Path>>(path: P) -> Result<Matrix<T>> {
        Self::new(path).load()
    }

    /// Encode `matrix` and write it to `path`, replacing any existing file
    pub fn write<T: MatrixElement, P: AsRef<Path>>(path: P, matrix: &Matrix<T>) -> Result<()> {
        Self::new(path).save(matrix)
    }

    /// Like [`MatrixFile::write`], creating missing parent directories first
    pub fn write_creating_dirs<T: MatrixElement, P: AsRef<Path>>(
        path: P,
        matrix: &Matrix<T>,
    ) -> Result<()> {
        let file = Self::new(path);
        if let Some(parent) = file.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        file.save(matrix)
    }

    /// Read the whole file, then decode it
    pub fn load<T: MatrixElement>(&self) -> Result<Matrix<T>> {
        let mut text = String::new();
        File::open(&self.path)
            .and_then(|mut file| file.read_to_string(&mut text))
            .map_err(|e| Error::io(&self.path, e))?;

        let matrix = decode::<T>(&text).map_err(|source| Error::Format {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            path = %self.path.display(),
            rows = matrix.rows(),
            cols = matrix.cols(),
            nnz = matrix.nnz(),
            "loaded matrix"
        );
        Ok(matrix)
    }

    /// Encode and write, flushing before returning
    pub fn save<T: MatrixElement>(&self, matrix: &Matrix<T>) -> Result<()> {
        let text = encode(matrix);
        let file = File::create(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(text.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| Error::io(&self.path, e))?;

        debug!(
            path = %self.path.display(),
            rows = matrix.rows(),
            cols = matrix.cols(),
            nnz = matrix.nnz(),
            bytes = text.len(),
            "saved matrix"
        );
        Ok(())
    }
}
