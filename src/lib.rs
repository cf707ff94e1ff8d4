//! # ccsort: Compressed Column Storage with column reordering
//!
//! This library maintains sparse matrices in Compressed Column Storage
//! (CCS/CSC) form and supports construction, text persistence, and a
//! column-reordering operation keyed by per-column sum.
//!
//! ## Overview
//!
//! The CCS layout stores a matrix as three parallel arrays: the non-zero
//! values in column-major order, the row index of each value, and a pointer
//! array delimiting where each column's entries start and end. Every public
//! operation keeps the three arrays mutually consistent:
//!
//! 1. **Construction**: random generation with a per-cell fill probability,
//!    or validated bulk load from raw arrays.
//!
//! 2. **Aggregation**: per-column sums, the key used for reordering.
//!
//! 3. **Reordering**: a stable sort of whole columns by ascending sum that
//!    rebuilds all three arrays together, preserving every entry and its row.
//!
//! 4. **Materialization**: a dense [`ndarray`] view for display collaborators,
//!    plus [`sprs`] conversions for the wider sparse ecosystem.
//!
//! ## Usage
//!
//! ```
//! use ccsort::SparseColumnMatrix;
//!
//! // Column sums are 5, 1 and 9.
//! let mut matrix = SparseColumnMatrix::from_parts(
//!     3,
//!     3,
//!     vec![5.0, 1.0, 9.0],
//!     vec![0, 2, 1],
//!     vec![0, 1, 2, 3],
//! )?;
//!
//! let report = matrix.sort_columns_by_sum();
//!
//! assert_eq!(matrix.column_sums(), vec![1.0, 5.0, 9.0]);
//! assert_eq!(report.placements[0].original_column, 1);
//! # Ok::<(), ccsort::MatrixError>(())
//! ```
//!
//! Random matrices come from a seeded generator:
//!
//! ```
//! use ccsort::{MatrixGenerator, SparseColumnMatrix};
//!
//! let mut generator = MatrixGenerator::new(42);
//! let matrix: SparseColumnMatrix<f64> = generator.generate(100, 100, 0.05)?;
//! assert_eq!(matrix.shape(), (100, 100));
//! # Ok::<(), ccsort::MatrixError>(())
//! ```

pub mod error;
pub mod io;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use error::{MatrixError, Result};
pub use io::{read_matrix, read_matrix_from, write_matrix, write_matrix_into};
pub use matrix::{ColumnPlacement, MatrixGenerator, SortReport, SparseColumnMatrix};
pub use utils::{from_sprs, to_sprs};

/// Version information for the ccsort library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn version_matches_manifest() {
        assert_eq!(super::VERSION, env!("CARGO_PKG_VERSION"));
    }
}
