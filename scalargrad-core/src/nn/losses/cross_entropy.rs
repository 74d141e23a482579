// scalargrad-core/src/nn/losses/cross_entropy.rs

use crate::error::ScalarGradError;
use crate::nn::functional::softmax;
use crate::node::Node;

/// Cross-entropy of unnormalized `logits` against a class index:
/// `-log(softmax(logits)[target])`.
///
/// Its gradient with respect to `logits` is `softmax(logits) - one_hot(target)`.
///
/// # Errors
/// * `EmptyInput` if `logits` is empty.
/// * `TargetOutOfBounds` if `target >= logits.len()`.
/// * `DomainError` if the target probability underflows to `0.0`.
pub fn cross_entropy(logits: &[Node], target: usize) -> Result<Node, ScalarGradError> {
    if logits.is_empty() {
        return Err(ScalarGradError::EmptyInput {
            operation: "cross_entropy".to_string(),
        });
    }
    if target >= logits.len() {
        return Err(ScalarGradError::TargetOutOfBounds {
            target,
            num_classes: logits.len(),
        });
    }
    let probs = softmax(logits)?;
    Ok(-probs[target].log()?)
}

#[cfg(test)]
#[path = "cross_entropy_test.rs"]
mod tests;
