// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::node::Node;
use crate::operand::Operand;
use crate::ops::arithmetic::{add_op, neg_op};

/// Subtracts `b` from `a`. Built as `a + (-b)`.
pub fn sub_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Node {
    add_op(a, neg_op(b))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
