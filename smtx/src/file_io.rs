//! File-backed loading and saving of matrix documents
//!
//! Whole-file operations by contract: read the entire file then parse,
//! render the entire document then write it with a single call. A read
//! failure of any kind surfaces as [`Error::NotFound`]; only result
//! writes produce [`Error::Io`].

use std::fs;
use std::path::Path;

use log::debug;
use smtx_core::{parse_document_with, render_document, ParseOptions, SparseMatrix};

use crate::error::{Error, Result};

/// Load a matrix document with the default (permissive) parse options
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    load_matrix_with(path, &ParseOptions::default())
}

/// Load a matrix document with explicit parse options
pub fn load_matrix_with<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<SparseMatrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|_| Error::NotFound {
        path: path.to_path_buf(),
    })?;
    let matrix = parse_document_with(&text, options).map_err(|source| Error::Format {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "loaded {}x{} matrix with {} entries from {}",
        matrix.rows(),
        matrix.cols(),
        matrix.nnz(),
        path.display()
    );
    Ok(matrix)
}

/// Render a matrix and write it to a file
///
/// The document is built in memory and handed to a single write call, so
/// the caller either gets the full file or an [`Error::Io`].
pub fn save_matrix<P: AsRef<Path>>(matrix: &SparseMatrix, path: P) -> Result<()> {
    let path = path.as_ref();
    let text = render_document(matrix);
    fs::write(path, text).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "saved {}x{} matrix with {} entries to {}",
        matrix.rows(),
        matrix.cols(),
        matrix.nnz(),
        path.display()
    );
    Ok(())
}
