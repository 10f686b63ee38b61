// scalargrad-core/src/autograd/executor.rs

use crate::autograd::topo::topological_sort;
use crate::error::ScalarGradError;
use crate::graph::{Graph, GraphId, Input, NodeId};
use log::{debug, trace};

/// Drives forward and backward passes over the sub-graph below a root node.
///
/// The topological order is computed once, in [`Executor::new`], and is a snapshot of the
/// graph's shape at that moment. Changing leaf values through [`Graph::set_value`] is fine;
/// nodes added to the graph afterwards are never visited and require a new executor.
///
/// Lifecycle:
/// 1. *constructed*: order computed, node values are those from construction time.
/// 2. *forward-complete*: [`forward`](Executor::forward) refreshed every value.
/// 3. *backward-complete*: [`backward`](Executor::backward) accumulated gradients.
///
/// A new `forward` invalidates gradients from a previous `backward`; they are not cleared
/// automatically (see [`Graph::zero_grad`]).
#[derive(Debug, Clone)]
pub struct Executor {
    graph_id: GraphId,
    root: NodeId,
    topo_order: Vec<NodeId>,
    debug: bool,
}

impl Executor {
    /// Builds an executor for `root`, computing the topological order of its sub-graph.
    ///
    /// # Errors
    /// `UnknownNode` if `root` is not a node of `graph`.
    pub fn new(graph: &Graph, root: NodeId) -> Result<Self, ScalarGradError> {
        graph.node(root)?;
        let topo_order = topological_sort(graph, root)?;
        debug!(
            "Executor: root {} of graph {}, {} node(s) in topological order",
            root,
            graph.id(),
            topo_order.len()
        );
        Ok(Executor {
            graph_id: graph.id(),
            root,
            topo_order,
            debug: false,
        })
    }

    /// Enables the per-node diagnostic trace. When set, trace lines are logged at `debug`
    /// level instead of `trace`.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Dependency-first order captured at construction; the root is last.
    pub fn order(&self) -> &[NodeId] {
        &self.topo_order
    }

    fn check_graph(&self, graph: &Graph) -> Result<(), ScalarGradError> {
        if graph.id() != self.graph_id {
            return Err(ScalarGradError::GraphMismatch {
                expected: self.graph_id,
                actual: graph.id(),
            });
        }
        Ok(())
    }

    fn log_node(&self, stage: &str, graph: &Graph, id: NodeId) -> Result<(), ScalarGradError> {
        if self.debug {
            debug!("{}: {}", stage, graph.trace_line(id)?);
        } else if log::log_enabled!(log::Level::Trace) {
            trace!("{}: {}", stage, graph.trace_line(id)?);
        }
        Ok(())
    }

    /// Re-evaluates every node in dependency order and returns the root's value.
    ///
    /// Leaf values changed since the last call are propagated to every dependent. On error
    /// the pass stops; nodes evaluated before the failing one keep their new values.
    pub fn forward(&self, graph: &mut Graph) -> Result<f64, ScalarGradError> {
        self.check_graph(graph)?;
        for &id in &self.topo_order {
            graph.evaluate(id)?;
            self.log_node("forward prop", graph, id)?;
        }
        graph.value(self.root)
    }

    /// Propagates gradients from the root back to every node of the order.
    ///
    /// The root's gradient is set to `seed` (1.0 for a scalar objective); every other node
    /// receives the sum of the partials contributed by each of its consumers. Because
    /// consumers come later in the topological order, a node's gradient is complete by the
    /// time it is processed in reverse order.
    ///
    /// Accumulators are not zeroed first: calling `backward` twice without
    /// [`Graph::zero_grad`] adds the second pass on top of the first for every non-root node.
    pub fn backward(&self, graph: &mut Graph, seed: f64) -> Result<(), ScalarGradError> {
        self.check_graph(graph)?;
        graph.set_grad(self.root, seed)?;

        for &id in self.topo_order.iter().rev() {
            let node = graph.node(id)?;
            let Some(output_grad) = node.grad() else {
                continue; // no gradient reached this node
            };
            let operator = node.operator();
            let inputs = node.inputs().to_vec();
            let input_values = graph.resolved_inputs(id)?;

            let partials = operator.backward(&input_values, output_grad)?;
            if partials.len() != inputs.len() {
                return Err(ScalarGradError::InternalError(format!(
                    "operator {} returned {} gradient(s) for {} input(s) at node {}",
                    operator.name(),
                    partials.len(),
                    inputs.len(),
                    id
                )));
            }

            for (input, partial) in inputs.iter().zip(partials) {
                if let Input::Node(input_id) = input {
                    graph.accumulate_grad(*input_id, partial)?;
                }
            }
        }

        for &id in self.topo_order.iter().rev() {
            self.log_node("after backward", graph, id)?;
        }
        Ok(())
    }

    /// [`backward`](Executor::backward) seeded with 1.0.
    pub fn backward_default(&self, graph: &mut Graph) -> Result<(), ScalarGradError> {
        self.backward(graph, 1.0)
    }

    /// Reads the gradient of each node in `ids`; a node no gradient reached reads as 0.0.
    pub fn gradients(&self, graph: &Graph, ids: &[NodeId]) -> Result<Vec<f64>, ScalarGradError> {
        self.check_graph(graph)?;
        ids.iter()
            .map(|id| Ok(graph.grad(*id)?.unwrap_or(0.0)))
            .collect()
    }
}

#[cfg(test)]
#[path = "executor_test.rs"]
mod tests;
