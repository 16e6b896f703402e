//! Index enumeration utilities for pairwise constraint generation.
//!
//! The constraint encoders iterate over cross products (every channel against
//! every exclusion zone) and over unique unordered pairs (every module against
//! every later module). Centralizing the enumeration keeps the generated
//! constraint order deterministic.

/// Returns all index pairs `(i, j)` with `i` ranging over `0..a` and `j` over `0..b`.
///
/// Pairs are produced in row-major order, so the resulting constraint order
/// is deterministic for a given input.
pub fn cross(a: usize, b: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(a * b);
    for i in 0..a {
        for j in 0..b {
            pairs.push((i, j));
        }
    }
    pairs
}

/// Returns all unordered index pairs `(i, j)` with `i < j < n`.
///
/// Used wherever a symmetric relationship (module–module separation,
/// channel–channel crossing) must be encoded exactly once per pair.
pub fn unique_pairs(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(n.saturating_sub(1) * n / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push((i, j));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_row_major() {
        assert_eq!(cross(2, 3), vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn cross_empty() {
        assert!(cross(0, 5).is_empty());
        assert!(cross(5, 0).is_empty());
    }

    #[test]
    fn unique_pairs_small() {
        assert_eq!(unique_pairs(4), vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn unique_pairs_degenerate() {
        assert!(unique_pairs(0).is_empty());
        assert!(unique_pairs(1).is_empty());
    }

    #[test]
    fn unique_pairs_count() {
        assert_eq!(unique_pairs(10).len(), 45);
    }
}
