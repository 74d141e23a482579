use crate::autograd::BackwardOp;
use crate::node::Node;
use crate::operand::Operand;

/// Logistic sigmoid, `1 / (1 + e^(-x))`.
///
/// Backward: `grad * s * (1 - s)` where `s` is the output.
pub fn sigmoid_op(a: impl Into<Operand>) -> Node {
    let a = a.into().into_node();
    crate::ops::apply_unary_op(&a, |x| 1.0 / (1.0 + (-x).exp()), BackwardOp::Sigmoid)
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
