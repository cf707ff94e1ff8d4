//! Conversions between our CCS format and the sprs sparse matrix library

use num_traits::Num;
use sprs::{CsMat, TriMat};

use crate::matrix::SparseColumnMatrix;

/// Converts our CCS matrix to a sprs CsMat in CSC storage
///
/// Goes through a triplet matrix so columns whose row indices are unsorted
/// are accepted. Note that sprs merges duplicate (row, col) entries by
/// summing them, so a matrix carrying duplicate rows within one column will
/// not round-trip entry-for-entry.
pub fn to_sprs<T>(matrix: &SparseColumnMatrix<T>) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    let mut triplets = TriMat::new((matrix.n_rows, matrix.n_cols));

    for j in 0..matrix.n_cols {
        for (row, &value) in matrix.col_iter(j) {
            triplets.add_triplet(row, j, value);
        }
    }

    triplets.to_csc()
}

/// Converts a sprs CsMat to our CCS matrix format
pub fn from_sprs<T>(matrix: CsMat<T>) -> SparseColumnMatrix<T>
where
    T: Copy + Num + Default,
{
    // Ensure matrix is in CSC format
    let matrix = if matrix.is_csc() {
        matrix
    } else {
        matrix.to_csc()
    };

    let (n_rows, n_cols) = matrix.shape();
    let (col_pointers, row_indices, values) = matrix.into_raw_storage();

    // A CsMat in CSC form guarantees the parallel-array invariants, so the
    // fields can be taken as-is.
    SparseColumnMatrix {
        n_rows,
        n_cols,
        values,
        row_indices,
        col_pointers,
    }
}
