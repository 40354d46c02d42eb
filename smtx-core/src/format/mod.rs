//! Text format definitions for matrix documents
//!
//! This module contains the line grammar and the document codec for the
//! textual sparse matrix format. No I/O operations; the codec works on
//! strings and the `smtx` crate attaches file access.

pub mod constants;
pub mod document;
pub mod entry;
pub mod header;

// Re-export format definitions
pub use document::{parse_document, parse_document_with, render_document, ParseOptions};
pub use entry::Entry;
pub use header::TextHeader;
