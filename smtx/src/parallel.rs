//! Parallel multiplication on the rayon pool
//!
//! The left operand's entries are partitioned across workers, each
//! accumulating contributions into a private map. Partial maps merge by
//! addition, so every result position receives exactly the contributions
//! the serial algorithm would give it and the numeric result is
//! identical, explicit zeros included.

use hashbrown::HashMap;
use rayon::prelude::*;
use smtx_core::{Entry, ShapeError, ShapeResult, SparseMatrix};

/// Matrix product on the rayon pool: C = A * B
///
/// Same shape contract and same result as [`SparseMatrix::mul`]; only the
/// execution strategy differs.
pub fn par_multiply(lhs: &SparseMatrix, rhs: &SparseMatrix) -> ShapeResult<SparseMatrix> {
    if lhs.cols() != rhs.rows() {
        return Err(ShapeError::InnerMismatch {
            lhs: lhs.shape(),
            rhs: rhs.shape(),
        });
    }

    let left: Vec<Entry> = lhs.entries().collect();
    let right: Vec<Entry> = rhs.entries().collect();
    let chunk_size = left.len().div_ceil(rayon::current_num_threads()).max(1);

    let partials: Vec<HashMap<(usize, usize), i64>> = left
        .par_chunks(chunk_size)
        .map(|chunk| {
            let mut partial: HashMap<(usize, usize), i64> = HashMap::new();
            for a in chunk {
                for b in &right {
                    if a.col == b.row {
                        *partial.entry((a.row, b.col)).or_insert(0) += a.value * b.value;
                    }
                }
            }
            partial
        })
        .collect();

    let mut result = SparseMatrix::new(lhs.rows(), rhs.cols());
    for partial in partials {
        for ((row, col), contribution) in partial {
            let current = result.get(row, col);
            result.set(row, col, current + contribution);
        }
    }
    Ok(result)
}
