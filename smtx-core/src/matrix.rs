//! Sparse matrix storage keyed by (row, col)

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::format::Entry;

/// Sparse 2-D integer matrix
///
/// Only recorded entries are stored; any position without a recorded entry
/// reads as zero. Dimensions are declared up front but grow automatically
/// when a write lands at or past the declared bound, so element data may
/// legally exceed whatever dimensions a document header announced.
///
/// Storing a zero keeps an explicit entry; nothing prunes the map. This is
/// what lets arithmetic results preserve positions whose contributions
/// cancel out.
#[derive(Debug, Clone, Default)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    elements: HashMap<(usize, usize), i64>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given declared dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            elements: HashMap::new(),
        }
    }

    /// Create a matrix from declared dimensions and an entry sequence
    ///
    /// Entries pass through [`set`](Self::set), so indices beyond the
    /// declared dimensions grow the matrix instead of failing. Later
    /// entries overwrite earlier ones at the same position.
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut matrix = Self::new(rows, cols);
        for entry in entries {
            matrix.set(entry.row, entry.col, entry.value);
        }
        matrix
    }

    /// Declared number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Declared number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored entries (explicit zeros included)
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    /// Whether the matrix stores no entries at all
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Read the value at a position
    ///
    /// Never fails: positions without a stored entry read as zero,
    /// including positions beyond the declared dimensions.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.elements.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Record a value at a position, overwriting any prior value
    ///
    /// Writing at or past a declared dimension grows that dimension to
    /// `index + 1`. The parser relies on this when element lines exceed
    /// the header's stated dimensions.
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        if row >= self.rows {
            self.rows = row + 1;
        }
        if col >= self.cols {
            self.cols = col + 1;
        }
        self.elements.insert((row, col), value);
    }

    /// Iterate over stored entries in unspecified order
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.elements
            .iter()
            .map(|(&(row, col), &value)| Entry::new(row, col, value))
    }

    /// Stored entries in ascending (row, col) order
    ///
    /// The serializer uses this ordering so repeated serialization of the
    /// same matrix is reproducible.
    pub fn sorted_entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.entries().collect();
        entries.sort_unstable_by_key(|entry| (entry.row, entry.col));
        entries
    }
}

/// Positional equality: same shape and every position reads the same value.
///
/// An explicit zero compares equal to an absent entry, so results of
/// arithmetic (which keep cancelled positions as stored zeros) still
/// compare equal to matrices that never stored those positions.
impl PartialEq for SparseMatrix {
    fn eq(&self, other: &Self) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        self.entries()
            .all(|entry| other.get(entry.row, entry.col) == entry.value)
            && other
                .entries()
                .all(|entry| self.get(entry.row, entry.col) == entry.value)
    }
}

impl Eq for SparseMatrix {}
