use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};

/// Checks that a value is within `tolerance` of `expected`.
/// Panics with both values and the difference otherwise (NaN never passes).
pub fn check_value_near(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    if diff.is_nan() || diff > tolerance {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

/// Checks that the gradient accumulated on `id` is set and within `tolerance` of `expected`.
pub fn check_grad_near(graph: &Graph, id: NodeId, expected: f64, tolerance: f64) {
    let grad = graph
        .grad(id)
        .expect("check_grad_near: node does not belong to graph")
        .unwrap_or_else(|| panic!("check_grad_near: node {} has no gradient", id));
    check_value_near(grad, expected, tolerance);
}

/// Builds `y = (ln(x1) + x1 * x2) - sin(x2)` and returns `(x1, x2, y)`.
pub fn build_reference_graph(
    graph: &mut Graph,
    x1: f64,
    x2: f64,
) -> Result<(NodeId, NodeId, NodeId), ScalarGradError> {
    let x1 = graph.var(x1, true);
    let x2 = graph.var(x2, true);
    let l = graph.ln(x1)?;
    let m = graph.mul(x1, x2)?;
    let a = graph.add(l, m)?;
    let s = graph.sin(x2)?;
    let y = graph.sub(a, s)?;
    Ok((x1, x2, y))
}
