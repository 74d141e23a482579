// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::node::Node;

/// Mean squared error between `predictions` and plain-number `targets`:
/// `sum_i (p_i - t_i)^2 / n`.
///
/// # Errors
/// * `EmptyInput` if there are no predictions.
/// * `InputSizeMismatch` if the two slices differ in length.
pub fn mse(predictions: &[Node], targets: &[f64]) -> Result<Node, ScalarGradError> {
    if predictions.is_empty() {
        return Err(ScalarGradError::EmptyInput {
            operation: "mse".to_string(),
        });
    }
    if predictions.len() != targets.len() {
        return Err(ScalarGradError::InputSizeMismatch {
            expected: predictions.len(),
            actual: targets.len(),
        });
    }
    let total: Node = predictions
        .iter()
        .zip(targets)
        .map(|(p, &t)| (p - t).pow(2.0))
        .sum();
    Ok(total / predictions.len() as f64)
}
