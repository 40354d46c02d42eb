//! Document-level codec between text and [`SparseMatrix`]

use alloc::format;
use alloc::string::String;

use super::constants::HEADER_LINES;
use super::entry::Entry;
use super::header::TextHeader;
use crate::error::{FormatError, FormatResult};
use crate::matrix::SparseMatrix;

/// Parsing policy for matrix documents
///
/// The default is the permissive policy: element lines whose indices
/// exceed the header dimensions grow the matrix. Strict mode treats the
/// header as a hard bound instead.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    strict_bounds: bool,
}

impl ParseOptions {
    /// Reject element lines whose indices exceed the header dimensions
    pub fn with_strict_bounds(mut self, strict: bool) -> Self {
        self.strict_bounds = strict;
        self
    }

    /// Whether out-of-header-bounds elements are rejected
    pub fn strict_bounds(&self) -> bool {
        self.strict_bounds
    }
}

/// Parse a matrix document with the default (permissive) options
pub fn parse_document(text: &str) -> FormatResult<SparseMatrix> {
    parse_document_with(text, &ParseOptions::default())
}

/// Parse a matrix document
///
/// The first two lines declare the dimensions; every following non-blank
/// line must be an element triple. Parsing aborts at the first violation;
/// no partial matrix is ever returned.
pub fn parse_document_with(text: &str, options: &ParseOptions) -> FormatResult<SparseMatrix> {
    let mut lines = text.lines();
    let rows_line = lines.next().ok_or(FormatError::MissingHeader { lines: 0 })?;
    let cols_line = lines.next().ok_or(FormatError::MissingHeader { lines: 1 })?;
    let header = TextHeader::parse(rows_line, cols_line)?;

    let mut matrix = SparseMatrix::new(header.rows, header.cols);
    for (index, raw_line) in lines.enumerate() {
        let line_number = HEADER_LINES + index + 1;
        let line = raw_line.trim_end();
        if line.trim().is_empty() {
            continue;
        }
        let entry = Entry::parse_line(line_number, line)?;
        if options.strict_bounds() && (entry.row >= header.rows || entry.col >= header.cols) {
            return Err(FormatError::EntryOutOfBounds {
                line_number,
                row: entry.row,
                col: entry.col,
                rows: header.rows,
                cols: header.cols,
            });
        }
        matrix.set(entry.row, entry.col, entry.value);
    }
    Ok(matrix)
}

/// Render a matrix as a document
///
/// Dimension lines first, then one line per stored entry in ascending
/// (row, col) order so repeated renders of the same matrix are identical.
/// The output carries no trailing whitespace.
pub fn render_document(matrix: &SparseMatrix) -> String {
    let mut out = format!("{}", TextHeader::new(matrix.rows(), matrix.cols()));
    for entry in matrix.sorted_entries() {
        out.push('\n');
        out.push_str(&format!("{entry}"));
    }
    out
}
