// scalargrad-core/src/ops/math_elem/exp.rs

use crate::autograd::BackwardOp;
use crate::node::Node;
use crate::operand::Operand;

/// Computes `e^x`.
///
/// Backward: `grad * e^x`. Overflow to infinity is not intercepted.
pub fn exp_op(a: impl Into<Operand>) -> Node {
    let a = a.into().into_node();
    crate::ops::apply_unary_op(&a, f64::exp, BackwardOp::Exp)
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
