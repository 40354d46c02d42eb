//! Arithmetic over sparse matrices
//!
//! All operations borrow both operands and build a fresh result; neither
//! operand is ever mutated. Result positions whose contributions cancel
//! out keep an explicit zero entry, consistent with the storage contract.

use crate::error::{ShapeError, ShapeResult};
use crate::matrix::SparseMatrix;

impl SparseMatrix {
    /// Element-wise addition: C = A + B
    ///
    /// Requires equal shapes. The result shape is the per-axis maximum of
    /// both operands, which degenerates to the common shape today but
    /// stays correct if shape auto-growth ever relaxes the check.
    pub fn add(&self, other: &Self) -> ShapeResult<Self> {
        self.check_same_shape(other)?;
        let mut result = Self::new(
            self.rows().max(other.rows()),
            self.cols().max(other.cols()),
        );
        for entry in self.entries() {
            result.set(entry.row, entry.col, entry.value);
        }
        for entry in other.entries() {
            let current = result.get(entry.row, entry.col);
            result.set(entry.row, entry.col, current + entry.value);
        }
        Ok(result)
    }

    /// Element-wise subtraction: C = A - B
    pub fn sub(&self, other: &Self) -> ShapeResult<Self> {
        self.check_same_shape(other)?;
        let mut result = Self::new(
            self.rows().max(other.rows()),
            self.cols().max(other.cols()),
        );
        for entry in self.entries() {
            result.set(entry.row, entry.col, entry.value);
        }
        for entry in other.entries() {
            let current = result.get(entry.row, entry.col);
            result.set(entry.row, entry.col, current - entry.value);
        }
        Ok(result)
    }

    /// Matrix product: C = A * B
    ///
    /// Requires `self.cols() == other.rows()`; the result is
    /// `self.rows() x other.cols()`. Every pair of stored entries with
    /// matching inner index contributes to the result, so positions in
    /// rows/columns with no matching terms get no entry at all.
    ///
    /// This is the O(nnz * nnz) reference algorithm. Partitioned
    /// execution strategies must reproduce its results exactly.
    pub fn mul(&self, other: &Self) -> ShapeResult<Self> {
        if self.cols() != other.rows() {
            return Err(ShapeError::InnerMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let mut result = Self::new(self.rows(), other.cols());
        for a in self.entries() {
            for b in other.entries() {
                if a.col == b.row {
                    let current = result.get(a.row, b.col);
                    result.set(a.row, b.col, current + a.value * b.value);
                }
            }
        }
        Ok(result)
    }

    fn check_same_shape(&self, other: &Self) -> ShapeResult<()> {
        if self.shape() != other.shape() {
            return Err(ShapeError::Mismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(())
    }
}
