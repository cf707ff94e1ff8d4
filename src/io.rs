//! Persistence in the four-line CCS text format
//!
//! A matrix is stored as four whitespace-separated lines:
//!
//! ```text
//! line 1: n_rows n_cols
//! line 2: values
//! line 3: row_indices
//! line 4: col_pointers
//! ```
//!
//! The reader never hands back an inconsistent matrix: parsed fields are
//! committed through [`SparseColumnMatrix::from_parts`], so structural
//! violations surface as [`MatrixError::MalformedMatrix`] and parse
//! failures as [`MatrixError::ParseError`].

use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use num_traits::Num;

use crate::error::{MatrixError, Result};
use crate::matrix::SparseColumnMatrix;

/// Reads a matrix from a file in the four-line text format
pub fn read_matrix<T, P: AsRef<Path>>(path: P) -> Result<SparseColumnMatrix<T>>
where
    T: Copy + Num + FromStr,
{
    let file = File::open(path)?;
    read_matrix_from(BufReader::new(file))
}

/// Writes a matrix to a file in the four-line text format
pub fn write_matrix<T, P: AsRef<Path>>(path: P, matrix: &SparseColumnMatrix<T>) -> Result<()>
where
    T: Copy + Num + Display,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_matrix_into(&mut writer, matrix)?;
    writer.flush()?;
    Ok(())
}

/// Reads a matrix from any buffered reader
pub fn read_matrix_from<T, R: BufRead>(reader: R) -> Result<SparseColumnMatrix<T>>
where
    T: Copy + Num + FromStr,
{
    let mut lines = reader.lines();

    // Line 1: dimensions
    let header = next_line(&mut lines, "dimensions")?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(MatrixError::ParseError(format!(
            "dimensions line must hold exactly two integers, got {} fields",
            fields.len()
        )));
    }
    let n_rows = parse_token::<usize>(fields[0], "n_rows")?;
    let n_cols = parse_token::<usize>(fields[1], "n_cols")?;

    // Lines 2-4: the three parallel arrays
    let values = parse_sequence::<T>(&next_line(&mut lines, "values")?, "values")?;
    let row_indices =
        parse_sequence::<usize>(&next_line(&mut lines, "row_indices")?, "row_indices")?;
    let col_pointers =
        parse_sequence::<usize>(&next_line(&mut lines, "col_pointers")?, "col_pointers")?;

    SparseColumnMatrix::from_parts(n_rows, n_cols, values, row_indices, col_pointers)
}

/// Writes a matrix to any writer, emitting exactly four lines
pub fn write_matrix_into<T, W: Write>(writer: &mut W, matrix: &SparseColumnMatrix<T>) -> Result<()>
where
    T: Copy + Num + Display,
{
    writeln!(writer, "{} {}", matrix.n_rows, matrix.n_cols)?;
    write_joined(writer, &matrix.values)?;
    write_joined(writer, &matrix.row_indices)?;
    write_joined(writer, &matrix.col_pointers)?;
    Ok(())
}

fn next_line<R: BufRead>(
    lines: &mut std::io::Lines<R>,
    what: &str,
) -> Result<String> {
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(MatrixError::ParseError(format!("missing {} line", what))),
    }
}

fn parse_token<V: FromStr>(token: &str, what: &str) -> Result<V> {
    token
        .parse()
        .map_err(|_| MatrixError::ParseError(format!("invalid {} value '{}'", what, token)))
}

fn parse_sequence<V: FromStr>(line: &str, what: &str) -> Result<Vec<V>> {
    line.split_whitespace()
        .map(|token| parse_token(token, what))
        .collect()
}

fn write_joined<W: Write, D: Display>(writer: &mut W, items: &[D]) -> Result<()> {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(writer, " ")?;
        }
        write!(writer, "{}", item)?;
    }
    writeln!(writer)?;
    Ok(())
}
