use crate::autograd::executor::Executor;
use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input node {leaf}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        leaf: NodeId,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input node {leaf}. Details: Output+: {output_plus:?}, Output-: {output_minus:?}")]
    NumericalGradNaNOrInfinite {
        leaf: NodeId,
        output_plus: f64,
        output_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input node {leaf}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { leaf: NodeId, value: f64 },
    #[error("Gradient check input must be an input node created by `var`. Node: {leaf}")]
    InputNotLeaf { leaf: NodeId },
    #[error("Graph evaluation failed during gradient check: {0}")]
    Autodiff(#[from] ScalarGradError),
}

/// Finite-difference settings for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Perturbation applied on each side of the leaf value.
    pub epsilon: f64,
    /// Accepted absolute or relative difference between the two gradients.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}

fn evaluate_at(
    graph: &mut Graph,
    executor: &Executor,
    leaf: NodeId,
    value: f64,
) -> Result<f64, ScalarGradError> {
    graph.set_value(leaf, value)?;
    executor.forward(graph)
}

/// Checks the analytical gradients of `root` with respect to `leaves` against central
/// finite differences.
///
/// Runs a forward and a backward pass (seed 1.0) after clearing all accumulators, then
/// perturbs each leaf by `±epsilon`. Every leaf is restored and the graph re-evaluated before
/// the next one is perturbed, so on success the graph holds the values and gradients of the
/// original point.
pub fn check_grad(
    graph: &mut Graph,
    root: NodeId,
    leaves: &[NodeId],
    config: &GradCheckConfig,
) -> Result<(), GradCheckError> {
    for &leaf in leaves {
        if !graph.node(leaf)?.is_input() {
            return Err(GradCheckError::InputNotLeaf { leaf });
        }
    }

    let executor = Executor::new(graph, root)?;
    graph.zero_grad();
    executor.forward(graph)?;
    executor.backward(graph, 1.0)?;
    let analytical_grads = executor.gradients(graph, leaves)?;

    for (&leaf, &analytical_grad) in leaves.iter().zip(analytical_grads.iter()) {
        let original = graph.value(leaf)?;

        let output_plus = evaluate_at(graph, &executor, leaf, original + config.epsilon);
        let output_minus = evaluate_at(graph, &executor, leaf, original - config.epsilon);
        graph.set_value(leaf, original)?;
        executor.forward(graph)?;
        let (output_plus, output_minus) = (output_plus?, output_minus?);

        let numerical_grad = (output_plus - output_minus) / (2.0 * config.epsilon);
        debug!(
            "check_grad: node {} analytical={} numerical={}",
            leaf, analytical_grad, numerical_grad
        );

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                leaf,
                output_plus,
                output_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                leaf,
                value: analytical_grad,
            });
        }
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.tolerance,
            max_relative = config.tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                leaf,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
