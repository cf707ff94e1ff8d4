//! Compressed Column Storage (CCS) matrix core

use std::fmt;

use ndarray::Array2;
use num_traits::Num;

use crate::error::{MatrixError, Result};

/// A sparse matrix in Compressed Column Storage (CCS/CSC) format
///
/// The CCS format stores a sparse matrix using three parallel arrays:
/// - col_pointers: Array of size n_cols + 1 containing indices into row_indices and values
/// - row_indices: Array of size nnz containing row indices of non-zero elements
/// - values: Array of size nnz containing the non-zero values
///
/// Entries are stored column-major; within one column the row indices are not
/// required to be sorted, and duplicate rows in a column are kept as distinct
/// entries (no operation merges them).
#[derive(Clone, PartialEq)]
pub struct SparseColumnMatrix<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Non-zero values (size: nnz)
    pub values: Vec<T>,

    /// Row indices (size: nnz)
    pub row_indices: Vec<usize>,

    /// Column pointers (size: n_cols + 1)
    /// col_pointers[j] is the index in row_indices and values where column j starts
    /// col_pointers[n_cols] is equal to nnz
    pub col_pointers: Vec<usize>,
}

impl<T> Default for SparseColumnMatrix<T> {
    /// An empty 0×0 matrix, the state before any construction operation.
    fn default() -> Self {
        Self {
            n_rows: 0,
            n_cols: 0,
            values: Vec::new(),
            row_indices: Vec::new(),
            col_pointers: vec![0],
        }
    }
}

impl<T> SparseColumnMatrix<T>
where
    T: Copy + Num,
{
    /// Creates an empty 0×0 matrix
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty matrix with the given logical dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            values: Vec::new(),
            row_indices: Vec::new(),
            col_pointers: vec![0; n_cols + 1],
        }
    }

    /// Builds a matrix from raw CCS arrays, validating every structural
    /// invariant before committing
    ///
    /// # Arguments
    ///
    /// * `n_rows` - Number of rows
    /// * `n_cols` - Number of columns
    /// * `values` - Non-zero values
    /// * `row_indices` - Row index of each value
    /// * `col_pointers` - Column boundaries, length n_cols + 1
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::MalformedMatrix`] naming the violated invariant:
    /// - values.len() must equal row_indices.len()
    /// - col_pointers.len() must be n_cols + 1
    /// - col_pointers must start at 0, be non-decreasing, and end at nnz
    /// - every row index must be < n_rows
    ///
    /// No matrix is produced on failure, so a caller's existing instance is
    /// never partially overwritten.
    pub fn from_parts(
        n_rows: usize,
        n_cols: usize,
        values: Vec<T>,
        row_indices: Vec<usize>,
        col_pointers: Vec<usize>,
    ) -> Result<Self> {
        if values.len() != row_indices.len() {
            return Err(MatrixError::MalformedMatrix(format!(
                "values and row_indices must have the same length ({} vs {})",
                values.len(),
                row_indices.len()
            )));
        }
        if col_pointers.len() != n_cols + 1 {
            return Err(MatrixError::MalformedMatrix(format!(
                "col_pointers length must be n_cols + 1 (expected {}, got {})",
                n_cols + 1,
                col_pointers.len()
            )));
        }
        if col_pointers[0] != 0 {
            return Err(MatrixError::MalformedMatrix(format!(
                "col_pointers must start at 0, got {}",
                col_pointers[0]
            )));
        }
        if let Some(j) = col_pointers.windows(2).position(|w| w[0] > w[1]) {
            return Err(MatrixError::MalformedMatrix(format!(
                "col_pointers must be non-decreasing ({} > {} at column {})",
                col_pointers[j],
                col_pointers[j + 1],
                j
            )));
        }
        if col_pointers[n_cols] != values.len() {
            return Err(MatrixError::MalformedMatrix(format!(
                "col_pointers must end at nnz (expected {}, got {})",
                values.len(),
                col_pointers[n_cols]
            )));
        }
        if let Some(k) = row_indices.iter().position(|&row| row >= n_rows) {
            return Err(MatrixError::MalformedMatrix(format!(
                "row index {} at position {} out of bounds (n_rows = {})",
                row_indices[k], k, n_rows
            )));
        }

        Ok(Self {
            n_rows,
            n_cols,
            values,
            row_indices,
            col_pointers,
        })
    }

    /// Returns the number of stored non-zero elements
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the matrix stores no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the logical dimensions as (n_rows, n_cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Returns an iterator over the non-zero elements in column j
    ///
    /// Each item is a tuple (row_index, value) representing a non-zero element
    pub fn col_iter(&self, j: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(j < self.n_cols, "Column index out of bounds");

        let start = self.col_pointers[j];
        let end = self.col_pointers[j + 1];

        self.row_indices[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&row, val)| (row, val))
    }

    /// Computes the sum of stored values in each column
    ///
    /// The result has one entry per column, aligned by column index; an empty
    /// column sums to zero. The matrix is not modified.
    pub fn column_sums(&self) -> Vec<T> {
        let mut sums = Vec::with_capacity(self.n_cols);

        for j in 0..self.n_cols {
            let start = self.col_pointers[j];
            let end = self.col_pointers[j + 1];
            let sum = self.values[start..end]
                .iter()
                .fold(T::zero(), |acc, &v| acc + v);
            sums.push(sum);
        }

        sums
    }

    /// Materializes the matrix as a dense 2D array
    ///
    /// Positions without a stored entry hold zero. If a column carries
    /// duplicate row indices, the last stored entry wins, matching the
    /// write-in-order semantics of a dense scatter. Intended for display and
    /// plotting collaborators; the sparse state is not modified.
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::zeros((self.n_rows, self.n_cols));

        for j in 0..self.n_cols {
            let start = self.col_pointers[j];
            let end = self.col_pointers[j + 1];
            for k in start..end {
                dense[[self.row_indices[k], j]] = self.values[k];
            }
        }

        dense
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseColumnMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseColumnMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        // Print a sample of the matrix content
        let max_cols_to_print = 5.min(self.n_cols);

        if max_cols_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for j in 0..max_cols_to_print {
                write!(f, "    col {}: ", j)?;
                let start = self.col_pointers[j];
                let end = self.col_pointers[j + 1];

                if start == end {
                    writeln!(f, "(empty)")?;
                } else {
                    let max_elements = 5.min(end - start);

                    for k in start..(start + max_elements) {
                        write!(f, "({}, {:?}) ", self.row_indices[k], self.values[k])?;
                    }

                    if end - start > max_elements {
                        write!(f, "... ({} more)", end - start - max_elements)?;
                    }

                    writeln!(f)?;
                }
            }

            if self.n_cols > max_cols_to_print {
                writeln!(f, "    ... ({} more columns)", self.n_cols - max_cols_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
