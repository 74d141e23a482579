//! # Operation Catalog (`ops`)
//!
//! Every differentiable operation on [`Node`]s lives here, grouped by kind:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`activation`]: relu, tanh, sigmoid.
//! - [`math_elem`]: natural log, exp.
//!
//! Each operation has a core function (`xxx_op`) that computes the forward value
//! and records a [`BackwardOp`] descriptor on the new node. The rule itself is
//! applied later by the backward pass. `Node` methods and std operator impls
//! are thin wrappers around these functions.

use crate::autograd::BackwardOp;
use crate::node::Node;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

/// Applies a unary operation to a node.
///
/// # Arguments
/// * `a`: The input node.
/// * `forward`: Computes the output value from the input value.
/// * `backward_op`: Descriptor recorded on the output node.
pub(crate) fn apply_unary_op<F>(a: &Node, forward: F, backward_op: BackwardOp) -> Node
where
    F: Fn(f64) -> f64,
{
    let value = forward(a.value());
    Node::from_op(value, vec![a.clone()], backward_op)
}

/// Applies a binary operation to two nodes. `a` and `b` may be the same vertex.
pub(crate) fn apply_binary_op<F>(a: &Node, b: &Node, forward: F, backward_op: BackwardOp) -> Node
where
    F: Fn(f64, f64) -> f64,
{
    let value = forward(a.value(), b.value());
    Node::from_op(value, vec![a.clone(), b.clone()], backward_op)
}
