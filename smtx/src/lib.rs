//! SMTX - Sparse Matrix Text Format
//!
//! This library provides file-backed loading and saving of sparse matrix
//! documents and the arithmetic pipeline a front end drives.
//!
//! ## Architecture
//!
//! SMTX follows a clean specification/implementation separation:
//!
//! - **smtx-core**: the matrix data structure, arithmetic, and the pure
//!   text codec (no I/O)
//! - **smtx**: file access, error categories for process exit codes, and
//!   the operation pipeline with a parallel multiplication path
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smtx::{compute, load_matrix, save_matrix, Operation};
//!
//! fn example() -> smtx::Result<()> {
//!     let lhs = load_matrix("a.smtx")?;
//!     let rhs = load_matrix("b.smtx")?;
//!
//!     let product = compute(Operation::Multiply, &lhs, &rhs)?;
//!     save_matrix(&product, "product.smtx")?;
//!     Ok(())
//! }
//! ```

// Re-export core abstractions and format definitions
pub use smtx_core::{
    // Data structures
    Entry, SparseMatrix, TextHeader,
    // Codec
    parse_document, parse_document_with, render_document, ParseOptions,
    // Error types
    FormatError, ShapeError,
};

// Implementation modules
pub mod engine;
pub mod error;
pub mod file_io;
pub mod parallel;

// Public exports
pub use engine::{
    compute, compute_add, compute_multiply, compute_subtract, compute_with, EngineConfig,
    Operation, UnknownOperation,
};
pub use error::{Error, ErrorCategory, Result};
pub use file_io::{load_matrix, load_matrix_with, save_matrix};
pub use parallel::par_multiply;
