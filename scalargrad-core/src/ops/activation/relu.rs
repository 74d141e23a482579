use crate::autograd::BackwardOp;
use crate::node::Node;
use crate::operand::Operand;

/// Rectified linear unit, `max(0, x)`.
///
/// Backward: the gradient passes through where `x > 0` and is zero elsewhere,
/// including at `x == 0`.
pub fn relu_op(a: impl Into<Operand>) -> Node {
    let a = a.into().into_node();
    crate::ops::apply_unary_op(&a, |x| if x < 0.0 { 0.0 } else { x }, BackwardOp::Relu)
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
