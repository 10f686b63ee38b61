use scalargrad_core::{Executor, Graph, NodeId, ScalarGradError};

// Helper to build the reference expression and its executor in one go.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn reference_setup(
    x1: f64,
    x2: f64,
) -> Result<(Graph, Executor, NodeId, NodeId), ScalarGradError> {
    let mut graph = Graph::new();
    let (x1, x2, y) = scalargrad_core::utils::testing::build_reference_graph(&mut graph, x1, x2)?;
    let exe = Executor::new(&graph, y)?;
    Ok((graph, exe, x1, x2))
}

/// Closed-form value of the reference expression.
#[allow(dead_code)]
pub(crate) fn reference_value(x1: f64, x2: f64) -> f64 {
    x1.ln() + x1 * x2 - x2.sin()
}

/// Closed-form gradient `(dy/dx1, dy/dx2)` of the reference expression.
#[allow(dead_code)]
pub(crate) fn reference_grad(x1: f64, x2: f64) -> (f64, f64) {
    (1.0 / x1 + x2, x1 - x2.cos())
}
