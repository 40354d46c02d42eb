//! Operation pipeline bridging a front end to the matrix arithmetic
//!
//! A front end resolves two operand matrices and an operation code; the
//! engine runs the operation and hands back the result matrix or the
//! shape error. Multiplication is routed to the rayon path once the
//! entry-pair workload crosses the configured threshold.

use std::str::FromStr;

use log::debug;
use smtx_core::SparseMatrix;
use thiserror::Error;

use crate::error::Result;
use crate::parallel::par_multiply;

/// The three operations a front end can select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Element-wise addition
    Add,
    /// Element-wise subtraction
    Subtract,
    /// Matrix product
    Multiply,
}

impl Operation {
    /// Canonical textual code for this operation
    pub fn code(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "sub",
            Operation::Multiply => "mul",
        }
    }
}

/// Raised for an operation code that names none of the three operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operation code: {0:?}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Accepts the canonical codes `add` / `sub` / `mul`, the long forms
    /// `subtract` / `multiply`, case-insensitively.
    fn from_str(code: &str) -> std::result::Result<Self, Self::Err> {
        match code.to_ascii_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "sub" | "subtract" => Ok(Operation::Subtract),
            "mul" | "multiply" => Ok(Operation::Multiply),
            _ => Err(UnknownOperation(code.into())),
        }
    }
}

/// Tuning knobs for the engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    parallel_threshold: usize,
}

impl EngineConfig {
    /// Entry-pair count above which multiplication runs on the rayon pool
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Get the configured entry-pair threshold
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // nnz(lhs) * nnz(rhs) pairs; below this the serial loop wins
            parallel_threshold: 32_768,
        }
    }
}

/// Run an operation with the default engine configuration
pub fn compute(operation: Operation, lhs: &SparseMatrix, rhs: &SparseMatrix) -> Result<SparseMatrix> {
    compute_with(operation, lhs, rhs, &EngineConfig::default())
}

/// Run an operation with an explicit engine configuration
///
/// The parallel threshold only changes where multiplication executes; the
/// numeric result is identical either way.
pub fn compute_with(
    operation: Operation,
    lhs: &SparseMatrix,
    rhs: &SparseMatrix,
    config: &EngineConfig,
) -> Result<SparseMatrix> {
    debug!(
        "computing {} over {:?} and {:?}",
        operation.code(),
        lhs.shape(),
        rhs.shape()
    );
    match operation {
        Operation::Add => Ok(lhs.add(rhs)?),
        Operation::Subtract => Ok(lhs.sub(rhs)?),
        Operation::Multiply => {
            let pairs = lhs.nnz().saturating_mul(rhs.nnz());
            if pairs > config.parallel_threshold() {
                debug!("multiplying {pairs} entry pairs on the rayon pool");
                Ok(par_multiply(lhs, rhs)?)
            } else {
                Ok(lhs.mul(rhs)?)
            }
        }
    }
}

/// Add two matrices
pub fn compute_add(lhs: &SparseMatrix, rhs: &SparseMatrix) -> Result<SparseMatrix> {
    compute(Operation::Add, lhs, rhs)
}

/// Subtract the right matrix from the left
pub fn compute_subtract(lhs: &SparseMatrix, rhs: &SparseMatrix) -> Result<SparseMatrix> {
    compute(Operation::Subtract, lhs, rhs)
}

/// Multiply two matrices
pub fn compute_multiply(lhs: &SparseMatrix, rhs: &SparseMatrix) -> Result<SparseMatrix> {
    compute(Operation::Multiply, lhs, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use smtx_core::Entry;

    fn sample(rows: usize, cols: usize, entries: &[(usize, usize, i64)]) -> SparseMatrix {
        SparseMatrix::from_entries(
            rows,
            cols,
            entries.iter().map(|&(row, col, value)| Entry::new(row, col, value)),
        )
    }

    #[test]
    fn test_operation_codes_parse() {
        assert_eq!("add".parse(), Ok(Operation::Add));
        assert_eq!("sub".parse(), Ok(Operation::Subtract));
        assert_eq!("subtract".parse(), Ok(Operation::Subtract));
        assert_eq!("mul".parse(), Ok(Operation::Multiply));
        assert_eq!("multiply".parse(), Ok(Operation::Multiply));
        assert_eq!("MUL".parse(), Ok(Operation::Multiply));
        assert_eq!(
            "div".parse::<Operation>(),
            Err(UnknownOperation("div".into()))
        );
    }

    #[test]
    fn test_codes_round_trip() {
        for operation in [Operation::Add, Operation::Subtract, Operation::Multiply] {
            assert_eq!(operation.code().parse(), Ok(operation));
        }
    }

    #[test]
    fn test_compute_matches_direct_operations() {
        let lhs = sample(2, 2, &[(0, 0, 1), (1, 1, 2)]);
        let rhs = sample(2, 2, &[(0, 0, 3), (0, 1, 4)]);

        assert_eq!(
            compute(Operation::Add, &lhs, &rhs).unwrap(),
            lhs.add(&rhs).unwrap()
        );
        assert_eq!(
            compute(Operation::Subtract, &lhs, &rhs).unwrap(),
            lhs.sub(&rhs).unwrap()
        );
        assert_eq!(
            compute(Operation::Multiply, &lhs, &rhs).unwrap(),
            lhs.mul(&rhs).unwrap()
        );
    }

    #[test]
    fn test_mismatch_surfaces_shape_category() {
        let lhs = sample(2, 2, &[(0, 0, 1)]);
        let rhs = sample(3, 3, &[(0, 0, 1)]);
        let error = compute_add(&lhs, &rhs).unwrap_err();
        assert_eq!(error.category(), ErrorCategory::Shape);
    }

    #[test]
    fn test_parallel_dispatch_is_unobservable() {
        let lhs = sample(4, 4, &[(0, 0, 2), (1, 2, -3), (3, 3, 5), (2, 1, 7)]);
        let rhs = sample(4, 4, &[(0, 3, 1), (2, 2, 4), (1, 0, -6), (3, 1, 8)]);

        let serial_only = EngineConfig::default().with_parallel_threshold(usize::MAX);
        let parallel_only = EngineConfig::default().with_parallel_threshold(0);

        let serial = compute_with(Operation::Multiply, &lhs, &rhs, &serial_only).unwrap();
        let parallel = compute_with(Operation::Multiply, &lhs, &rhs, &parallel_only).unwrap();
        assert_eq!(serial, parallel);
        assert_eq!(serial.sorted_entries(), parallel.sorted_entries());
    }
}
