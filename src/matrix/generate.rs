//! Random construction of CCS matrices

use num_traits::{Num, NumCast};
use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{MatrixError, Result};
use crate::matrix::SparseColumnMatrix;

/// Smallest generated non-zero value
const MIN_VALUE: i32 = 1;

/// Largest generated non-zero value
const MAX_VALUE: i32 = 100;

impl<T> SparseColumnMatrix<T>
where
    T: Copy + Num + NumCast,
{
    /// Generates a random sparse matrix
    ///
    /// Every cell is filled with probability `density`, visiting columns in
    /// ascending order and rows in ascending order within each column, so the
    /// result is already in CCS entry order. Values are uniform integers in
    /// [1, 100] cast into `T`. Deterministic for a fixed seeded RNG.
    ///
    /// # Arguments
    ///
    /// * `n_rows` - Number of rows (0 produces an empty matrix)
    /// * `n_cols` - Number of columns (0 produces an empty matrix)
    /// * `density` - Fill probability, must lie in (0, 1]
    /// * `rng` - Random source
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidParameter`] if `density` is outside
    /// (0, 1]. Zero density is rejected.
    pub fn random<R: Rng>(
        n_rows: usize,
        n_cols: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self> {
        if !(density > 0.0 && density <= 1.0) {
            return Err(MatrixError::InvalidParameter(format!(
                "density must be in (0, 1], got {}",
                density
            )));
        }

        let value_dist = Uniform::from(MIN_VALUE..=MAX_VALUE);

        let mut values = Vec::new();
        let mut row_indices = Vec::new();
        let mut col_pointers = Vec::with_capacity(n_cols + 1);
        col_pointers.push(0);

        for _col in 0..n_cols {
            for row in 0..n_rows {
                if rng.gen::<f64>() < density {
                    let v: i32 = value_dist.sample(rng);
                    let value = T::from(v).ok_or_else(|| {
                        MatrixError::InvalidParameter(format!(
                            "element type cannot represent generated value {}",
                            v
                        ))
                    })?;
                    values.push(value);
                    row_indices.push(row);
                }
            }
            col_pointers.push(values.len());
        }

        Ok(Self {
            n_rows,
            n_cols,
            values,
            row_indices,
            col_pointers,
        })
    }
}

/// Generates random sparse matrices from a seeded RNG
///
/// Owns a `ChaCha8Rng` so a fixed seed reproduces the same sequence of
/// matrices across runs.
pub struct MatrixGenerator {
    rng: ChaCha8Rng,
}

impl MatrixGenerator {
    /// Creates a generator seeded for reproducibility
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generates a single random matrix with the given shape and density
    pub fn generate<T>(
        &mut self,
        n_rows: usize,
        n_cols: usize,
        density: f64,
    ) -> Result<SparseColumnMatrix<T>>
    where
        T: Copy + Num + NumCast,
    {
        SparseColumnMatrix::random(n_rows, n_cols, density, &mut self.rng)
    }
}
