// src/node/mod.rs

use crate::autograd::BackwardOp;
use crate::node_data::NodeData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod autograd_methods;
mod op_methods;
mod traits;

/// Stable identity of a vertex, used as the key of the traversal's visited set.
///
/// It is the address of the shared cell, so two `Node` handles have the same id
/// exactly when they refer to the same vertex. It stays valid for as long as a
/// handle to the vertex is alive.
pub type NodeId = *const RefCell<NodeData>;

/// A scalar vertex of the computation graph.
///
/// `Node` uses `Rc<RefCell<NodeData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node is shared by every child that lists it as a
///     parent and by any user handle. Cloning a `Node` is cheap and never copies
///     the vertex.
/// 2.  **Interior Mutability:** the gradient (and the value, for parameter
///     updates) can be modified through a shared handle.
///
/// Parent edges always point to nodes created earlier, so the graph cannot
/// contain ownership cycles and dropping the last handle frees the whole
/// unreachable subgraph.
#[derive(Clone)]
pub struct Node {
    pub(crate) data: Rc<RefCell<NodeData>>,
}

impl Node {
    /// Creates a new leaf node holding `value`, with a zero gradient.
    pub fn new(value: f64) -> Self {
        Node {
            data: Rc::new(RefCell::new(NodeData::new(value))),
        }
    }

    /// Creates the output node of an operation. `parents` is moved in, so
    /// every node owns its own independent parent list.
    pub(crate) fn from_op(value: f64, parents: Vec<Node>, op: BackwardOp) -> Self {
        debug_assert_eq!(parents.len(), op.arity(), "wrong operand count for {:?}", op);
        Node {
            data: Rc::new(RefCell::new(NodeData::with_op(value, parents, op))),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, NodeData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, NodeData> {
        self.data.borrow_mut()
    }

    /// Returns the forward value.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Overwrites the forward value.
    ///
    /// Intended for optimizers updating leaf parameters (`value -= lr * grad`).
    /// Nodes already built from this one keep the value they were computed with.
    pub fn set_value(&self, value: f64) {
        self.write_data().value = value;
    }

    /// Returns the accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the accumulated gradient.
    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Resets the gradient to zero. Gradients accumulate across backward passes,
    /// so parameters must be zeroed before each new pass.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Returns the diagnostic label (operation symbol unless overridden).
    pub fn label(&self) -> String {
        self.read_data().label.clone()
    }

    /// Sets the diagnostic label.
    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = label.into();
    }

    /// Builder-style variant of [`set_label`](Self::set_label).
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// Returns handles to the parent nodes, in operand order.
    pub fn parents(&self) -> Vec<Node> {
        self.read_data().parents.clone()
    }

    /// Returns the number of parent edges.
    pub fn num_parents(&self) -> usize {
        self.read_data().parents.len()
    }

    /// Returns the operation that produced this node, if any.
    pub fn op(&self) -> Option<BackwardOp> {
        self.read_data().op
    }

    /// True for nodes without parents.
    pub fn is_leaf(&self) -> bool {
        self.read_data().parents.is_empty()
    }

    /// Returns the identity of the underlying vertex.
    pub fn id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// True when both handles refer to the same vertex.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

/// Constructs a node from a value and an explicit parent list.
///
/// The node carries no backward rule: the traversal reaches its parents but no
/// gradient flows into them. Each call takes ownership of its own `parents`
/// vector, so unrelated nodes never alias a shared default list.
pub fn make_node(value: f64, parents: Vec<Node>) -> Node {
    let mut data = NodeData::new(value);
    data.parents = parents;
    Node {
        data: Rc::new(RefCell::new(data)),
    }
}
