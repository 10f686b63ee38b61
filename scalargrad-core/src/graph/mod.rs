//! # Computation Graph (`graph`)
//!
//! The [`Graph`] is an arena owning every [`Node`]. Edges are [`NodeId`] indices into the
//! arena, so a sub-expression consumed by several parents is shared without reference
//! counting. A node can only reference nodes that already exist, which makes cycles
//! structurally impossible.
//!
//! Construction is eager: each constructor resolves its inputs, runs the operator's forward
//! function and only then commits the node. A failing forward leaves the arena untouched.

use crate::error::ScalarGradError;
use crate::ops::{Operator, ADD, COS, DIV, EXP, IDENTITY, LN, MUL, NEG, SIN, SUB};
use log::trace;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

mod debug;
pub mod node;

pub use debug::NodeTrace;
pub use node::{Input, Node, NodeId};

static NEXT_GRAPH_ID: AtomicUsize = AtomicUsize::new(0);

/// Process-unique identifier of a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphId(usize);

impl GraphId {
    fn next() -> Self {
        GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Arena of computation nodes.
#[derive(Debug)]
pub struct Graph {
    id: GraphId,
    nodes: Vec<Node>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Creates an empty graph with a fresh [`GraphId`].
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph pre-allocated for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            id: GraphId::next(),
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over every node in construction order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns the node stored at `id`.
    ///
    /// # Errors
    /// `UnknownNode` if `id` does not address a slot of this graph.
    pub fn node(&self, id: NodeId) -> Result<&Node, ScalarGradError> {
        self.nodes.get(id.0).ok_or(ScalarGradError::UnknownNode {
            id,
            len: self.nodes.len(),
        })
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, ScalarGradError> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.0)
            .ok_or(ScalarGradError::UnknownNode { id, len })
    }

    pub fn value(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        Ok(self.node(id)?.value)
    }

    pub fn grad(&self, id: NodeId) -> Result<Option<f64>, ScalarGradError> {
        Ok(self.node(id)?.grad)
    }

    pub fn requires_grad(&self, id: NodeId) -> Result<bool, ScalarGradError> {
        Ok(self.node(id)?.requires_grad)
    }

    /// Sets the `requires_grad` flag of a node.
    ///
    /// Nodes built later inherit the new flag; nodes already built on top of `id` keep the
    /// flag they computed at construction.
    pub fn set_requires_grad(&mut self, id: NodeId, requires_grad: bool) -> Result<(), ScalarGradError> {
        let node = self.node_mut(id)?;
        if requires_grad && !node.is_leaf() {
            log::warn!(
                "Setting requires_grad=true on non-leaf node {}; gradients still accumulate but the flag is not propagated to existing consumers.",
                id
            );
        }
        node.requires_grad = requires_grad;
        Ok(())
    }

    /// Assigns a new constant to an input node created by [`Graph::var`].
    ///
    /// The node's own value is updated immediately; dependents are refreshed by the next
    /// `Executor::forward`.
    ///
    /// # Errors
    /// `NotALeaf` if `id` is not an input node.
    pub fn set_value(&mut self, id: NodeId, value: f64) -> Result<(), ScalarGradError> {
        let node = self.node_mut(id)?;
        if !node.is_input() {
            return Err(ScalarGradError::NotALeaf { id });
        }
        let new_value = node.operator.forward(&[value])?;
        node.inputs[0] = Input::Const(value);
        node.value = new_value;
        Ok(())
    }

    /// Clears every gradient accumulator. Gradients are never reset implicitly between
    /// backward passes.
    pub fn zero_grad(&mut self) {
        for node in self.nodes.iter_mut() {
            node.grad = None;
        }
    }

    fn resolve(&self, input: &Input) -> Result<f64, ScalarGradError> {
        match input {
            Input::Node(id) => self.value(*id),
            Input::Const(value) => Ok(*value),
        }
    }

    fn resolve_all(&self, inputs: &[Input]) -> Result<Vec<f64>, ScalarGradError> {
        inputs.iter().map(|input| self.resolve(input)).collect()
    }

    /// Returns the current numeric value of each input of `id`, in order.
    /// Node inputs are replaced by their cached value, constants are returned as-is.
    pub fn resolved_inputs(&self, id: NodeId) -> Result<Vec<f64>, ScalarGradError> {
        self.resolve_all(&self.node(id)?.inputs)
    }

    /// Renders `id` as a one-line diagnostic, with node inputs shown as their current values.
    pub fn trace_line(&self, id: NodeId) -> Result<String, ScalarGradError> {
        let node = self.node(id)?;
        let input_values = self.resolve_all(&node.inputs)?;
        Ok(NodeTrace { node, input_values: &input_values }.to_string())
    }

    /// Recomputes the value of `id` from the live values of its inputs.
    ///
    /// On error the previous value is kept.
    pub fn evaluate(&mut self, id: NodeId) -> Result<f64, ScalarGradError> {
        let input_values = self.resolved_inputs(id)?;
        let node = self.node_mut(id)?;
        node.value = node.operator.forward(&input_values)?;
        Ok(node.value)
    }

    pub(crate) fn set_grad(&mut self, id: NodeId, grad: f64) -> Result<(), ScalarGradError> {
        self.node_mut(id)?.grad = Some(grad);
        Ok(())
    }

    /// Adds `grad` into the accumulator of `id`, starting from 0 when unset.
    pub(crate) fn accumulate_grad(&mut self, id: NodeId, grad: f64) -> Result<(), ScalarGradError> {
        let node = self.node_mut(id)?;
        *node.grad.get_or_insert(0.0) += grad;
        Ok(())
    }

    // --- Construction ---

    fn push(
        &mut self,
        operator: &'static dyn Operator,
        inputs: Vec<Input>,
        input_values: &[f64],
        value: f64,
        requires_grad: bool,
        is_input: bool,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let node = Node {
            id,
            operator,
            inputs,
            value,
            requires_grad,
            grad: None,
            is_input,
        };
        trace!("graph {}: created {}", self.id, NodeTrace { node: &node, input_values });
        self.nodes.push(node);
        id
    }

    /// Applies `operator` to `inputs` and commits the resulting node.
    ///
    /// The node requires grad if any node-typed input does. This is the entry point for
    /// operators defined outside this crate.
    ///
    /// # Errors
    /// * `UnknownNode` if an input references a node outside this graph.
    /// * Any error returned by `operator.forward` (`ArityError`, `DomainError`, ...).
    pub fn apply(
        &mut self,
        operator: &'static dyn Operator,
        inputs: Vec<Input>,
    ) -> Result<NodeId, ScalarGradError> {
        let input_values = self.resolve_all(&inputs)?;
        let value = operator.forward(&input_values)?;
        let requires_grad = inputs
            .iter()
            .filter_map(Input::as_node)
            .any(|id| self.nodes[id.0].requires_grad);
        Ok(self.push(operator, inputs, &input_values, value, requires_grad, false))
    }

    /// Creates an input (leaf) node holding `value`.
    pub fn var(&mut self, value: f64, requires_grad: bool) -> NodeId {
        self.push(&IDENTITY, vec![Input::Const(value)], &[value], value, requires_grad, true)
    }

    /// `a + b`
    pub fn add(&mut self, a: impl Into<Input>, b: impl Into<Input>) -> Result<NodeId, ScalarGradError> {
        self.apply(&ADD, vec![a.into(), b.into()])
    }

    /// `a - b`
    pub fn sub(&mut self, a: impl Into<Input>, b: impl Into<Input>) -> Result<NodeId, ScalarGradError> {
        self.apply(&SUB, vec![a.into(), b.into()])
    }

    /// `a * b`
    pub fn mul(&mut self, a: impl Into<Input>, b: impl Into<Input>) -> Result<NodeId, ScalarGradError> {
        self.apply(&MUL, vec![a.into(), b.into()])
    }

    /// `a / b`; fails with `DomainError` if `b` resolves to zero.
    pub fn div(&mut self, a: impl Into<Input>, b: impl Into<Input>) -> Result<NodeId, ScalarGradError> {
        self.apply(&DIV, vec![a.into(), b.into()])
    }

    /// `-a`
    pub fn neg(&mut self, a: impl Into<Input>) -> Result<NodeId, ScalarGradError> {
        self.apply(&NEG, vec![a.into()])
    }

    /// `ln(a)`; fails with `DomainError` if `a` resolves to a non-positive value.
    pub fn ln(&mut self, a: impl Into<Input>) -> Result<NodeId, ScalarGradError> {
        self.apply(&LN, vec![a.into()])
    }

    /// `exp(a)`
    pub fn exp(&mut self, a: impl Into<Input>) -> Result<NodeId, ScalarGradError> {
        self.apply(&EXP, vec![a.into()])
    }

    /// `sin(a)`
    pub fn sin(&mut self, a: impl Into<Input>) -> Result<NodeId, ScalarGradError> {
        self.apply(&SIN, vec![a.into()])
    }

    /// `cos(a)`
    pub fn cos(&mut self, a: impl Into<Input>) -> Result<NodeId, ScalarGradError> {
        self.apply(&COS, vec![a.into()])
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
