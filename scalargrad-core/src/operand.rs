// src/operand.rs

use crate::node::Node;

/// An operand of a catalog operation: either an existing node or a plain number.
///
/// Every binary operation accepts `impl Into<Operand>` on both sides and calls
/// [`Operand::into_node`] at entry, so `node + 2.0` and `2.0 + node` build the
/// same graph shape: the number becomes a fresh leaf parent.
#[derive(Debug, Clone)]
pub enum Operand {
    /// A plain real number, promoted to a leaf node when used as a node.
    Scalar(f64),
    /// An existing graph node, used as-is.
    Node(Node),
}

impl Operand {
    /// Promotes the operand to a node. Scalars become new leaves.
    pub fn into_node(self) -> Node {
        match self {
            Operand::Scalar(value) => Node::new(value),
            Operand::Node(node) => node,
        }
    }

    /// Returns the plain number, or `None` for node operands.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Operand::Scalar(value) => Some(*value),
            Operand::Node(_) => None,
        }
    }

    /// Name of the operand kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "scalar",
            Operand::Node(_) => "node",
        }
    }
}

impl From<Node> for Operand {
    fn from(node: Node) -> Self {
        Operand::Node(node)
    }
}

impl From<&Node> for Operand {
    fn from(node: &Node) -> Self {
        Operand::Node(node.clone())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}
