use crate::error::{CoreError, Result};

/// Sum of elementwise products: Σ x[i]·y[i].
///
/// Mismatched lengths are rejected rather than silently truncated.
/// Empty inputs reduce to 0.0.
pub fn sum_product(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(CoreError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    Ok(x.iter().zip(y.iter()).map(|(a, b)| a * b).sum())
}
