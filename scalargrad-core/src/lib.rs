//! # ScalarGrad core
//!
//! Reverse-mode automatic differentiation over scalar computation graphs.
//!
//! Nodes live in a [`Graph`] arena and are addressed by [`NodeId`]. Each node applies a shared,
//! stateless [`Operator`] to an ordered list of [`Input`]s (other nodes or inline constants).
//! An [`Executor`] snapshots the topological order below a root node and drives the forward
//! and backward passes over it.
//!
//! ```
//! use scalargrad_core::{Executor, Graph};
//!
//! let mut graph = Graph::new();
//! let x = graph.var(3.0, true);
//! let y = graph.mul(x, x).unwrap();
//!
//! let exe = Executor::new(&graph, y).unwrap();
//! assert_eq!(exe.forward(&mut graph).unwrap(), 9.0);
//! exe.backward(&mut graph, 1.0).unwrap();
//! assert_eq!(graph.grad(x).unwrap(), Some(6.0));
//! ```

pub mod autograd;
pub mod graph;
pub mod ops;
pub mod utils;

pub mod error;
pub use error::ScalarGradError;

// Re-export the types most callers need directly from the crate root
pub use autograd::executor::Executor;
pub use autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};
pub use graph::{Graph, GraphId, Input, Node, NodeId};
pub use ops::Operator;
