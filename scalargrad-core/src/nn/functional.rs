//! Stateless helpers over slices of nodes.

use crate::error::ScalarGradError;
use crate::node::Node;

/// Wraps plain numbers as fresh leaf nodes.
pub fn leaves(values: &[f64]) -> Vec<Node> {
    values.iter().map(|&v| Node::new(v)).collect()
}

/// Sums the nodes. The empty sum is a `0.0` leaf.
pub fn sum(nodes: &[Node]) -> Node {
    nodes.iter().sum()
}

/// Index of the largest value, `None` for an empty slice. NaN values are never
/// selected over a number; ties keep the first index.
pub fn argmax(nodes: &[Node]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, node) in nodes.iter().enumerate() {
        let v = node.value();
        match best {
            Some((_, best_v)) if !(v > best_v) => {}
            _ if v.is_nan() => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Softmax over the nodes: `exp(x_i) / sum_j exp(x_j)`.
///
/// No max-subtraction is applied, so very large inputs overflow to infinity
/// and yield NaN probabilities.
///
/// # Errors
/// Returns `ScalarGradError::EmptyInput` for an empty slice.
pub fn softmax(nodes: &[Node]) -> Result<Vec<Node>, ScalarGradError> {
    if nodes.is_empty() {
        return Err(ScalarGradError::EmptyInput {
            operation: "softmax".to_string(),
        });
    }
    let exps: Vec<Node> = nodes.iter().map(Node::exp).collect();
    let total = sum(&exps);
    Ok(exps.iter().map(|e| e / &total).collect())
}

#[cfg(test)]
#[path = "functional_test.rs"]
mod tests;
