use crate::autograd::BackwardOp;
use crate::node::Node;
use crate::operand::Operand;

/// Hyperbolic tangent.
///
/// Backward: `grad * (1 - tanh(x)^2)`.
pub fn tanh_op(a: impl Into<Operand>) -> Node {
    let a = a.into().into_node();
    crate::ops::apply_unary_op(&a, f64::tanh, BackwardOp::Tanh)
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
