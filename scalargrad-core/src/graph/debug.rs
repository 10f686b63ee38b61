// scalargrad-core/src/graph/debug.rs
use crate::graph::node::Node;
use std::fmt;

/// Diagnostic one-line rendering of a node with its inputs resolved to numbers.
/// Used by the executor trace. Not a stable format.
pub struct NodeTrace<'a> {
    pub(crate) node: &'a Node,
    pub(crate) input_values: &'a [f64],
}

impl fmt::Display for NodeTrace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node;
        write!(f, "<Node{:>3}: op={}, inputs={:?}", node.id.index(), node.operator.name(), self.input_values)?;
        write!(
            f,
            ", value={}, requires_grad={}, grad={:?}>",
            node.value, node.requires_grad, node.grad
        )
    }
}
