//! Small vector-math seam used by the similarity scorers.
//!
//! Scorers take a `&dyn VectorMath` so hosts can plug in an accelerated
//! backend. [`StandardMath`] is the plain-arithmetic default.

/// Vector operations needed by the scorers.
pub trait VectorMath: Send + Sync {
    /// Sum of element-wise products. Both slices must have equal length.
    fn dot(&self, a: &[f64], b: &[f64]) -> f64;

    /// Euclidean norm.
    fn norm(&self, a: &[f64]) -> f64;

    /// Arithmetic mean, or `None` for an empty slice.
    fn mean(&self, values: &[f64]) -> Option<f64>;
}

/// Plain-arithmetic [`VectorMath`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMath;

impl VectorMath for StandardMath {
    fn dot(&self, a: &[f64], b: &[f64]) -> f64 {
        a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
    }

    fn norm(&self, a: &[f64]) -> f64 {
        a.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    fn mean(&self, values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Cosine similarity of two vectors, in `[-1, 1]`.
///
/// Returns `None` when the lengths differ. A zero-norm vector yields `0.0`.
/// Non-finite input yields NaN.
pub fn cosine_similarity(math: &dyn VectorMath, a: &[f64], b: &[f64]) -> Option<f64> {
    if a.len() != b.len() {
        return None;
    }
    Some(cosine_from_norms(math, a, b, math.norm(a), math.norm(b)).unwrap_or(0.0))
}

/// Cosine similarity from norms the caller already computed.
///
/// Returns `None` when either norm is zero. Lengths must match.
pub fn cosine_from_norms(
    math: &dyn VectorMath,
    a: &[f64],
    b: &[f64],
    norm_a: f64,
    norm_b: f64,
) -> Option<f64> {
    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }

    // Clamp away floating point drift such as 1.0000000002
    Some((math.dot(a, b) / (norm_a * norm_b)).clamp(-1.0, 1.0))
}
