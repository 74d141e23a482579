use crate::autograd::backward_op::propagate;
use crate::autograd::graph::topological_sort;
use crate::node::Node;
use log::debug;

impl Node {
    /// Performs the backward pass starting from this node.
    ///
    /// Seeds this node's gradient with `1.0`, sorts the graph topologically and
    /// runs every node's local backward rule in reverse order, so each rule reads
    /// a gradient to which all of its consumers have already contributed.
    ///
    /// Gradients are *added* into ancestors. Nothing is zeroed first: callers
    /// running several passes over the same parameters must call
    /// [`zero_grad`](Node::zero_grad) between them.
    ///
    /// On a leaf this only sets its own gradient to `1.0`.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        debug!(
            "backward(): {} nodes reachable from root ({})",
            sorted_nodes.len(),
            self.label()
        );

        self.set_grad(1.0);
        for node in sorted_nodes.iter().rev() {
            propagate(node);
        }
        debug!("backward(): done");
    }
}
