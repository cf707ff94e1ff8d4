//! Column reordering keyed by per-column sum

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use num_traits::Num;

use crate::matrix::SparseColumnMatrix;
use crate::utils::exclusive_scan;

/// Where one original column landed after a sort
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnPlacement<T> {
    /// Position the column occupies after the sort
    pub position: usize,

    /// Index the column had before the sort
    pub original_column: usize,

    /// Sum of the column's stored values
    pub column_sum: T,
}

/// Outcome of a column sort: the permutation that was applied and how long
/// the rebuild took. The elapsed time is observability only.
#[derive(Debug, Clone)]
pub struct SortReport<T> {
    /// Wall time of the sort and array rebuild
    pub elapsed: Duration,

    /// One entry per new column position, ascending by position
    pub placements: Vec<ColumnPlacement<T>>,
}

impl<T> SparseColumnMatrix<T>
where
    T: Copy + Num + PartialOrd,
{
    /// Reorders whole columns so their sums are ascending
    ///
    /// Computes [`column_sums`](Self::column_sums), stable-sorts the column
    /// positions by sum (equal-sum columns keep their original relative
    /// order), then rebuilds all three CCS arrays by concatenating each
    /// column's value/row slice verbatim in the new order. Every stored entry
    /// keeps its row and value; only the column order changes. The three
    /// arrays are replaced together, never partially.
    ///
    /// Re-running on an already-sorted matrix is a no-op permutation.
    ///
    /// # Returns
    ///
    /// A [`SortReport`] listing, for each new position, which original column
    /// landed there and its sum, along with the elapsed wall time.
    pub fn sort_columns_by_sum(&mut self) -> SortReport<T> {
        let start_time = Instant::now();

        let sums = self.column_sums();

        let mut order: Vec<usize> = (0..self.n_cols).collect();
        // Stable sort; incomparable sums (NaN) rank as equal rather than panic.
        order.sort_by(|&a, &b| sums[a].partial_cmp(&sums[b]).unwrap_or(Ordering::Equal));

        let mut sorted_values = Vec::with_capacity(self.nnz());
        let mut sorted_row_indices = Vec::with_capacity(self.nnz());
        let mut col_lengths = Vec::with_capacity(self.n_cols);

        for &col in &order {
            let start = self.col_pointers[col];
            let end = self.col_pointers[col + 1];

            sorted_values.extend_from_slice(&self.values[start..end]);
            sorted_row_indices.extend_from_slice(&self.row_indices[start..end]);
            col_lengths.push(end - start);
        }

        self.values = sorted_values;
        self.row_indices = sorted_row_indices;
        self.col_pointers = exclusive_scan(&col_lengths);

        let placements = order
            .iter()
            .enumerate()
            .map(|(position, &original_column)| ColumnPlacement {
                position,
                original_column,
                column_sum: sums[original_column],
            })
            .collect();

        SortReport {
            elapsed: start_time.elapsed(),
            placements,
        }
    }
}
