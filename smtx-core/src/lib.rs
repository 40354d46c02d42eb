#![no_std]

//! SMTX Core - Sparse Matrix Text Format Definitions
//!
//! This crate provides the sparse matrix data structure, the arithmetic
//! operations over it, and the text document codec. No I/O happens here;
//! the `smtx` crate layers file access on top.

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
mod ops;

pub use error::*;
pub use format::*;
pub use matrix::*;
