use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use log::trace;
use std::collections::HashSet;

/// Builds a topological order of every node reachable from `root`.
///
/// Post-order depth-first traversal: a node is emitted only after all of its node-typed
/// inputs, so dependencies always precede dependents and `root` comes last. Inputs are
/// visited left to right and each node appears exactly once.
///
/// Uses an explicit stack so long chains do not exhaust the call stack.
///
/// # Errors
/// `UnknownNode` if `root` or any reachable input is not part of `graph`.
pub fn topological_sort(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list = Vec::new();
    // (node, children already scheduled)
    let mut stack = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            trace!("[topological_sort] Adding node {} to sorted_list", id);
            sorted_list.push(id);
            continue;
        }
        if !visited.insert(id) {
            continue;
        }
        let node = graph.node(id)?;
        stack.push((id, true));
        // Reversed so the first input is popped, and emitted, first.
        for input_id in node.input_nodes().collect::<Vec<_>>().into_iter().rev() {
            if !visited.contains(&input_id) {
                stack.push((input_id, false));
            }
        }
    }

    Ok(sorted_list)
}

#[cfg(test)]
#[path = "topo_test.rs"]
mod tests;
