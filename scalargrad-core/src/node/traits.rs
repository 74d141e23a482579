// src/node/traits.rs

use super::Node;
use crate::operand::Operand;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

// Node equality is identity: two handles are equal when they share a vertex.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for Node {
    // Parents are summarised by count; printing them would walk the whole graph.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Node")
            .field("value", &guard.value)
            .field("grad", &guard.grad)
            .field("label", &guard.label)
            .field("parents", &guard.parents.len())
            .finish()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node(value={}, grad={})", self.value(), self.grad())
    }
}

/// Implements a std binary operator for every `Node` / `&Node` / number pairing,
/// forwarding to the corresponding `_op` function. Numbers on the left are
/// promoted through the same [`Operand`] path as numbers on the right.
///
/// Only `f64` and `i32` get left-hand impls, so an unsuffixed literal such as
/// `2.0 + &x` resolves to a single impl.
macro_rules! impl_binary_op {
    (@scalar_lhs $trait:ident, $method:ident, $op_fn:path, $scalar:ty) => {
        impl $trait<Node> for $scalar {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl $trait<&Node> for $scalar {
            type Output = Node;
            fn $method(self, rhs: &Node) -> Node {
                $op_fn(self, rhs)
            }
        }
    };
    ($trait:ident, $method:ident, $op_fn:path) => {
        impl<R: Into<Operand>> $trait<R> for Node {
            type Output = Node;
            fn $method(self, rhs: R) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl<R: Into<Operand>> $trait<R> for &Node {
            type Output = Node;
            fn $method(self, rhs: R) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl_binary_op!(@scalar_lhs $trait, $method, $op_fn, f64);
        impl_binary_op!(@scalar_lhs $trait, $method, $op_fn, i32);
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl Neg for Node {
    type Output = Node;
    fn neg(self) -> Node {
        neg_op(self)
    }
}

impl Neg for &Node {
    type Output = Node;
    fn neg(self) -> Node {
        neg_op(self)
    }
}

/// Sums nodes starting from a fresh `0.0` leaf, so the empty sum is a valid node.
impl Sum for Node {
    fn sum<I: Iterator<Item = Node>>(iter: I) -> Node {
        iter.fold(Node::new(0.0), |acc, node| add_op(acc, node))
    }
}

impl<'a> Sum<&'a Node> for Node {
    fn sum<I: Iterator<Item = &'a Node>>(iter: I) -> Node {
        iter.fold(Node::new(0.0), |acc, node| add_op(acc, node))
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::new(value)
    }
}
