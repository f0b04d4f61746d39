//! Dense square similarity matrix.

use serde::{Deserialize, Serialize};

/// Row-major N×N matrix of overall similarity scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// An N×N matrix filled with zeros.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Score at row `i`, column `j`. Panics when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: f64) {
        self.values[i * self.size + j] = value;
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Copy into nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.size).map(|i| self.row(i).to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let m = SimilarityMatrix::zeros(3);
        assert_eq!(m.len(), 3);
        assert!(m.row(1).iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_empty() {
        let m = SimilarityMatrix::zeros(0);
        assert!(m.is_empty());
        assert!(m.to_rows().is_empty());
    }

    #[test]
    fn test_set_get_row_major() {
        let mut m = SimilarityMatrix::zeros(2);
        m.set(0, 1, 0.25);
        assert_eq!(m.get(0, 1), 0.25);
        assert_eq!(m.get(1, 0), 0.0);
        assert_eq!(m.to_rows(), vec![vec![0.0, 0.25], vec![0.0, 0.0]]);
    }
}
