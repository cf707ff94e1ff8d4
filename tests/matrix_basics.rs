//! Basic tests for CCS matrix construction, aggregation and materialization

use ccsort::{MatrixError, SparseColumnMatrix};

#[test]
fn test_matrix_creation() {
    let matrix = SparseColumnMatrix::from_parts(
        3,
        3,
        vec![1.0, 4.0, 2.0, 3.0, 5.0],
        vec![0, 2, 0, 1, 2],
        vec![0, 2, 4, 5],
    )
    .unwrap();

    assert_eq!(matrix.n_rows, 3);
    assert_eq!(matrix.n_cols, 3);
    assert_eq!(matrix.nnz(), 5);

    // Check first column
    let first_col: Vec<_> = matrix.col_iter(0).collect();
    assert_eq!(first_col.len(), 2);
    assert_eq!(first_col[0].0, 0);
    assert_eq!(*first_col[0].1, 1.0);
    assert_eq!(first_col[1].0, 2);
    assert_eq!(*first_col[1].1, 4.0);

    // Check second column
    let second_col: Vec<_> = matrix.col_iter(1).collect();
    assert_eq!(second_col.len(), 2);
    assert_eq!(second_col[0].0, 0);
    assert_eq!(*second_col[0].1, 2.0);
    assert_eq!(second_col[1].0, 1);
    assert_eq!(*second_col[1].1, 3.0);

    // Check third column
    let third_col: Vec<_> = matrix.col_iter(2).collect();
    assert_eq!(third_col.len(), 1);
    assert_eq!(third_col[0].0, 2);
    assert_eq!(*third_col[0].1, 5.0);
}

#[test]
fn test_default_is_empty() {
    let matrix = SparseColumnMatrix::<f64>::default();

    assert_eq!(matrix.shape(), (0, 0));
    assert_eq!(matrix.nnz(), 0);
    assert_eq!(matrix.col_pointers, vec![0]);
}

#[test]
fn test_column_sums_align_with_columns() {
    let matrix = SparseColumnMatrix::from_parts(
        4,
        3,
        vec![1, 2, 3, 4],
        vec![0, 1, 2, 3],
        vec![0, 2, 2, 4],
    )
    .unwrap();

    let sums = matrix.column_sums();
    assert_eq!(sums.len(), matrix.n_cols);
    assert_eq!(sums, vec![3, 0, 7]);

    // Total mass matches the value array.
    let total: i32 = matrix.values.iter().sum();
    assert_eq!(sums.iter().sum::<i32>(), total);
}

#[test]
fn test_dense_materialization_matches_sparse() {
    let matrix = SparseColumnMatrix::from_parts(
        2,
        3,
        vec![7.0, 8.0, 9.0],
        vec![1, 0, 1],
        vec![0, 1, 2, 3],
    )
    .unwrap();

    let dense = matrix.to_dense();

    assert_eq!(dense.shape(), &[2, 3]);
    assert_eq!(dense[[1, 0]], 7.0);
    assert_eq!(dense[[0, 1]], 8.0);
    assert_eq!(dense[[1, 2]], 9.0);
    assert_eq!(dense[[0, 0]], 0.0);

    // Materialization never touches the sparse arrays.
    assert_eq!(matrix.values, vec![7.0, 8.0, 9.0]);
}

#[test]
fn test_load_rejects_inconsistent_arrays() {
    let result = SparseColumnMatrix::from_parts(
        3,
        3,
        vec![1.0, 2.0],
        vec![0, 1],
        vec![0, 1, 2], // should have 4 entries
    );

    match result {
        Err(MatrixError::MalformedMatrix(message)) => {
            assert!(message.contains("n_cols + 1"));
        }
        other => panic!("expected MalformedMatrix, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_failed_load_leaves_caller_state_untouched() {
    let existing = SparseColumnMatrix::from_parts(
        2,
        2,
        vec![1.0, 2.0],
        vec![0, 1],
        vec![0, 1, 2],
    )
    .unwrap();
    let snapshot = existing.clone();

    // A rejected load produces no value, so the caller's instance survives.
    let result =
        SparseColumnMatrix::<f64>::from_parts(2, 2, vec![1.0], vec![5], vec![0, 1, 1]);
    assert!(result.is_err());
    assert_eq!(existing, snapshot);
}

#[test]
fn test_debug_output_is_bounded() {
    let matrix = SparseColumnMatrix::from_parts(
        10,
        20,
        vec![1.0; 10],
        (0..10).collect(),
        (0..=10).chain(std::iter::repeat(10).take(10)).collect(),
    )
    .unwrap();

    let printed = format!("{:?}", matrix);
    assert!(printed.contains("dimensions: 10 × 20"));
    assert!(printed.contains("nnz: 10"));
    assert!(printed.contains("more columns"));
}
