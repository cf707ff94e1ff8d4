//! Utility functions and helpers

pub mod formats;

pub use formats::{from_sprs, to_sprs};

/// Computes an exclusive prefix sum (scan) for a slice of lengths
///
/// Given per-column entry counts this produces a valid `col_pointers` array:
/// the result starts at 0, has one more element than the input, and ends at
/// the total count.
pub fn exclusive_scan(lengths: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(lengths.len() + 1);
    let mut sum = 0;

    result.push(0); // First element is always 0

    for &len in lengths {
        sum += len;
        result.push(sum);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_scan() {
        let input = vec![1, 2, 3, 4];
        let expected = vec![0, 1, 3, 6, 10];
        assert_eq!(exclusive_scan(&input), expected);

        let input = vec![0, 0, 5, 0];
        let expected = vec![0, 0, 0, 5, 5];
        assert_eq!(exclusive_scan(&input), expected);
    }

    #[test]
    fn test_exclusive_scan_empty() {
        assert_eq!(exclusive_scan(&[]), vec![0]);
    }
}
