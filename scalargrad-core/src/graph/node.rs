// scalargrad-core/src/graph/node.rs

use crate::ops::Operator;
use std::fmt;

/// Identifier of a node: its slot index inside the owning [`Graph`](super::Graph).
///
/// Ids are assigned in construction order, so a node's inputs always carry smaller ids than
/// the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the arena slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single operand of a node: either another node of the same graph or an inline constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Node(NodeId),
    Const(f64),
}

impl Input {
    /// Returns the referenced node, if this input is node-typed.
    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            Input::Node(id) => Some(*id),
            Input::Const(_) => None,
        }
    }
}

impl From<NodeId> for Input {
    fn from(id: NodeId) -> Self {
        Input::Node(id)
    }
}

impl From<&NodeId> for Input {
    fn from(id: &NodeId) -> Self {
        Input::Node(*id)
    }
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Input::Const(value)
    }
}

/// A vertex of the computation graph.
///
/// Holds the shared operator, the ordered inputs, the cached forward value and the gradient
/// accumulator. Fields are only mutated through [`Graph`](super::Graph).
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) operator: &'static dyn Operator,
    pub(crate) inputs: Vec<Input>,
    pub(crate) value: f64,
    pub(crate) requires_grad: bool,
    /// `None` until the first backward pass reaches this node.
    pub(crate) grad: Option<f64>,
    /// Set only by `Graph::var`.
    pub(crate) is_input: bool,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn operator(&self) -> &'static dyn Operator {
        self.operator
    }

    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    /// Cached result of the last evaluation.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn requires_grad(&self) -> bool {
        self.requires_grad
    }

    /// Accumulated gradient of the last backward root with respect to this node.
    pub fn grad(&self) -> Option<f64> {
        self.grad
    }

    /// Iterates over the node-typed inputs, in input order (duplicates included).
    pub fn input_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.inputs.iter().filter_map(Input::as_node)
    }

    /// A leaf has no node-typed inputs.
    pub fn is_leaf(&self) -> bool {
        self.input_nodes().next().is_none()
    }

    /// True only for nodes created by `Graph::var`. Applying the identity operator (or any
    /// operator reporting the same name) through `Graph::apply` does not make an input node.
    pub fn is_input(&self) -> bool {
        self.is_input
    }
}
