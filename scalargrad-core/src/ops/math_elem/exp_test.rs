#[cfg(test)]
mod tests {
    use crate::autograd::executor::Executor;
    use crate::error::ScalarGradError;
    use crate::graph::Graph;
    use crate::ops::{Operator, EXP};
    use approx::assert_relative_eq;

    #[test]
    fn test_exp_forward() -> Result<(), ScalarGradError> {
        assert_relative_eq!(EXP.forward(&[0.0])?, 1.0);
        assert_relative_eq!(EXP.forward(&[1.0])?, std::f64::consts::E);
        Ok(())
    }

    #[test]
    fn test_exp_of_ln_is_identity_gradient() -> Result<(), ScalarGradError> {
        // exp(ln(x)) == x, so the gradient w.r.t. x is 1.
        let mut graph = Graph::new();
        let x = graph.var(2.5, true);
        let l = graph.ln(x)?;
        let y = graph.exp(l)?;

        let exe = Executor::new(&graph, y)?;
        assert_relative_eq!(exe.forward(&mut graph)?, 2.5, epsilon = 1e-12);
        exe.backward(&mut graph, 1.0)?;
        assert_relative_eq!(graph.grad(x)?.unwrap(), 1.0, epsilon = 1e-12);
        Ok(())
    }
}
