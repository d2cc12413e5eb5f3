//! Edge weights.

use crate::utils::error::{Error, Result};

/// Signed edge weight. Must be finite.
pub type Weight = f64;

/// Returns the weight unchanged if it is finite.
///
/// # Errors
///
/// Returns [`Error::InvalidWeight`] for NaN or infinite values.
pub fn ensure_finite(weight: Weight) -> Result<Weight> {
    if weight.is_finite() {
        Ok(weight)
    } else {
        Err(Error::InvalidWeight(weight))
    }
}
