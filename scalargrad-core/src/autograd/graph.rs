use crate::node::{Node, NodeId};
use log::trace;
use std::collections::HashSet;

/// Builds a topological sort of the computation graph rooted at `root`.
///
/// The result contains every node reachable from `root` through parent edges,
/// each exactly once, and every parent appears before all of its children. The
/// root is therefore last; `backward()` walks the result in reverse.
///
/// The depth-first post-order uses an explicit stack, so arbitrarily deep graphs
/// (long training-loop chains) do not grow the call stack. The visited set is
/// keyed by [`NodeId`], which deduplicates shared subexpressions: a node reached
/// through several paths is emitted once, after all of its own parents.
pub fn topological_sort(root: &Node) -> Vec<Node> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Node> = Vec::new();
    // `true` marks a node whose parents have already been scheduled.
    let mut stack: Vec<(Node, bool)> = vec![(root.clone(), false)];

    while let Some((node, parents_scheduled)) = stack.pop() {
        if parents_scheduled {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            trace!("[topological_sort] {:?} already visited", node.id());
            continue;
        }

        let parents = node.parents();
        trace!(
            "[topological_sort] visiting {:?} ({}) with {} parents",
            node.id(),
            node.label(),
            parents.len()
        );
        stack.push((node, true));
        // Reversed so the first operand is explored first.
        for parent in parents.into_iter().rev() {
            if !visited.contains(&parent.id()) {
                stack.push((parent, false));
            }
        }
    }

    sorted_list
}
