//! Shared constants for the sparse matrix text format.
//!
//! File format (line-oriented, header-first):
//! ```text
//! rows=<digits>
//! cols=<digits>
//! (<row>, <col>, <value>)
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Blank lines among the element lines are permitted and ignored.

/// Prefix of the mandatory first line
pub const ROWS_PREFIX: &str = "rows=";

/// Prefix of the mandatory second line
pub const COLS_PREFIX: &str = "cols=";

/// Number of mandatory dimension lines at the top of a document
pub const HEADER_LINES: usize = 2;
