// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::node::Node;
use crate::operand::Operand;

/// Adds two operands, each a node or a plain number.
///
/// Backward: both operands receive the output gradient unchanged. When both
/// operands are the same node it receives it twice.
pub fn add_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Node {
    let a = a.into().into_node();
    let b = b.into().into_node();
    crate::ops::apply_binary_op(&a, &b, |x, y| x + y, BackwardOp::Add)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
