// src/node_data.rs
use crate::autograd::BackwardOp;
use crate::node::Node;
use std::rc::Rc;

/// Internal storage for a single vertex of the computation graph.
///
/// It is wrapped in `Rc<RefCell<NodeData>>` by the [`Node`] handle so that every
/// child referencing it as a parent shares the same vertex, and so that `grad`
/// (and, for optimizers, `value`) can be mutated through a shared handle.
#[derive(Debug)]
pub struct NodeData {
    /// Forward value computed when the node was created.
    pub(crate) value: f64,
    /// Accumulated gradient of the current backward root with respect to this node.
    pub(crate) grad: f64,
    /// Operands this node was computed from, in operand order. One entry per use,
    /// so `a + a` stores `a` twice.
    pub(crate) parents: Vec<Node>,
    /// Operation that produced this node. `None` for leaves and for nodes built
    /// with [`make_node`](crate::node::make_node).
    pub(crate) op: Option<BackwardOp>,
    /// Diagnostic label, defaults to the operation symbol.
    pub(crate) label: String,
}

impl NodeData {
    /// Creates the data of a leaf node: no parents, no backward rule, zero gradient.
    pub fn new(value: f64) -> Self {
        NodeData {
            value,
            grad: 0.0,
            parents: Vec::new(),
            op: None,
            label: String::new(),
        }
    }

    /// Creates the data of a node produced by `op` from `parents`.
    pub(crate) fn with_op(value: f64, parents: Vec<Node>, op: BackwardOp) -> Self {
        NodeData {
            value,
            grad: 0.0,
            parents,
            op: Some(op),
            label: op.symbol(),
        }
    }
}

// Parents are released with an explicit worklist instead of the default
// recursive drop, so freeing a very deep graph cannot overflow the stack.
impl Drop for NodeData {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.parents);
        while let Some(node) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(node.data) {
                let mut data = cell.into_inner();
                pending.append(&mut data.parents);
            }
        }
    }
}
