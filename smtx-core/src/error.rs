//! Error types for matrix codec and arithmetic operations

use alloc::string::String;

/// Errors that can occur while parsing a matrix document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Input ended before both dimension lines were read
    MissingHeader {
        /// Number of lines actually present
        lines: usize,
    },
    /// A dimension line did not match `rows=<digits>` / `cols=<digits>`
    InvalidDimensionLine {
        /// The offending line text
        line: String,
    },
    /// A non-blank element line did not match `(<row>, <col>, <value>)`
    InvalidElementLine {
        /// 1-based line number in the document
        line_number: usize,
        /// The offending line text
        line: String,
    },
    /// Strict mode only: an element addressed a position outside the declared dimensions
    EntryOutOfBounds {
        /// 1-based line number in the document
        line_number: usize,
        /// Row index of the rejected element
        row: usize,
        /// Column index of the rejected element
        col: usize,
        /// Declared row count from the header
        rows: usize,
        /// Declared column count from the header
        cols: usize,
    },
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::MissingHeader { lines } => {
                write!(f, "not enough lines for dimensions: expected 2, got {lines}")
            }
            FormatError::InvalidDimensionLine { line } => {
                write!(f, "invalid dimension format: {line:?}")
            }
            FormatError::InvalidElementLine { line_number, line } => {
                write!(f, "invalid element format on line {line_number}: {line:?}")
            }
            FormatError::EntryOutOfBounds {
                line_number,
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "element ({row}, {col}) on line {line_number} outside declared {rows}x{cols} matrix"
                )
            }
        }
    }
}

impl core::error::Error for FormatError {}

/// Errors raised when operand shapes are incompatible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// Addition/subtraction operands differ in shape
    Mismatch {
        /// Shape of the left operand as (rows, cols)
        lhs: (usize, usize),
        /// Shape of the right operand as (rows, cols)
        rhs: (usize, usize),
    },
    /// Multiplication operands disagree on the inner dimension
    InnerMismatch {
        /// Shape of the left operand as (rows, cols)
        lhs: (usize, usize),
        /// Shape of the right operand as (rows, cols)
        rhs: (usize, usize),
    },
}

impl core::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShapeError::Mismatch { lhs, rhs } => {
                write!(
                    f,
                    "shape mismatch: {}x{} vs {}x{}",
                    lhs.0, lhs.1, rhs.0, rhs.1
                )
            }
            ShapeError::InnerMismatch { lhs, rhs } => {
                write!(
                    f,
                    "inner dimension mismatch: {}x{} * {}x{}",
                    lhs.0, lhs.1, rhs.0, rhs.1
                )
            }
        }
    }
}

impl core::error::Error for ShapeError {}

/// Result type for codec operations
pub type FormatResult<T> = core::result::Result<T, FormatError>;

/// Result type for arithmetic operations
pub type ShapeResult<T> = core::result::Result<T, ShapeError>;
