use crate::graph::{GraphId, NodeId};
use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Arity mismatch for operator {operator}: expected {expected} input(s), got {actual}")]
    ArityError {
        operator: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Domain error in operator {operator}: {message} (inputs: {values:?})")]
    DomainError {
        operator: &'static str,
        message: String,
        values: Vec<f64>,
    },

    #[error("Unknown node {id}: graph only holds {len} node(s)")]
    UnknownNode { id: NodeId, len: usize },

    #[error("Graph mismatch: executor was built for graph {expected}, got graph {actual}")]
    GraphMismatch { expected: GraphId, actual: GraphId },

    #[error("Node {id} is not an input node; only `var` leaves can be assigned a new value")]
    NotALeaf { id: NodeId },

    #[error("Internal error: {0}")]
    InternalError(String),
}
