// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::node::Node;
use crate::operand::Operand;

/// Multiplies two operands, each a node or a plain number.
///
/// Backward: `a` receives `grad * b`, `b` receives `grad * a`.
pub fn mul_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Node {
    let a = a.into().into_node();
    let b = b.into().into_node();
    crate::ops::apply_binary_op(&a, &b, |x, y| x * y, BackwardOp::Mul)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
