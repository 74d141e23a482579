// scalargrad-core/src/ops/arithmetic/div.rs

use crate::node::Node;
use crate::operand::Operand;
use crate::ops::arithmetic::mul_op;
use crate::ops::arithmetic::pow::powf;

/// Divides `a` by `b`. Built as `a * b^(-1)`.
///
/// Division by a node whose value is exactly zero is not intercepted: the
/// forward value becomes infinite or NaN per IEEE-754 and so do the gradients.
pub fn div_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Node {
    let b = b.into().into_node();
    mul_op(a, powf(&b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
