//! # Reverse-mode autodiff (`autograd`)
//!
//! - [`topo`]: post-order topological sort below a root node.
//! - [`executor`]: the [`Executor`](executor::Executor) driving forward and backward passes.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod executor;
pub mod grad_check;
pub mod topo;

pub use executor::Executor;
pub use topo::topological_sort;
