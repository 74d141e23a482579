// scalargrad-core/src/ops/arithmetic/neg.rs

use crate::node::Node;
use crate::operand::Operand;
use crate::ops::arithmetic::mul_op;

/// Negates an operand. Built as a multiplication by `-1`, so the operand
/// receives `-grad`.
pub fn neg_op(a: impl Into<Operand>) -> Node {
    mul_op(a, -1.0)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
