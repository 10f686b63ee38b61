#[cfg(test)]
mod tests {
    use crate::autograd::executor::Executor;
    use crate::error::ScalarGradError;
    use crate::graph::Graph;
    use crate::utils::testing::{check_grad_near, check_value_near};
    use log::{LevelFilter, Log, Metadata, Record};
    use std::sync::Mutex;

    // Collects formatted log lines so the debug trace content can be asserted.
    struct CaptureLogger {
        lines: Mutex<Vec<String>>,
    }

    impl Log for CaptureLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::Level::Debug
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                if let Ok(mut lines) = self.lines.lock() {
                    lines.push(record.args().to_string());
                }
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger { lines: Mutex::new(Vec::new()) };

    fn captured_lines() -> Vec<String> {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Debug);
        LOGGER.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }

    #[test]
    fn test_forward_returns_root_value() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let x = graph.var(2.0, true);
        let y = graph.add(x, 3.0)?;
        let z = graph.mul(y, y)?;

        let exe = Executor::new(&graph, z)?;
        assert_eq!(exe.root(), z);
        assert_eq!(exe.order(), &[x, y, z]);
        check_value_near(exe.forward(&mut graph)?, 25.0, 1e-12);
        Ok(())
    }

    #[test]
    fn test_forward_is_idempotent() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let x = graph.var(0.3, true);
        let s = graph.sin(x)?;
        let e = graph.exp(s)?;
        let y = graph.div(e, x)?;

        let exe = Executor::new(&graph, y)?;
        let first = exe.forward(&mut graph)?;
        let second = exe.forward(&mut graph)?;
        assert_eq!(first.to_bits(), second.to_bits());
        Ok(())
    }

    #[test]
    fn test_forward_propagates_leaf_mutation() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let x = graph.var(1.0, true);
        let a = graph.mul(x, 2.0)?;
        let b = graph.add(a, x)?;
        let exe = Executor::new(&graph, b)?;
        check_value_near(exe.forward(&mut graph)?, 3.0, 1e-12);

        graph.set_value(x, 4.0)?;
        check_value_near(exe.forward(&mut graph)?, 12.0, 1e-12);
        check_value_near(graph.value(a)?, 8.0, 1e-12);
        // Same inputs, same output.
        check_value_near(exe.forward(&mut graph)?, 12.0, 1e-12);
        Ok(())
    }

    #[test]
    fn test_backward_seed_scales_gradients() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let x = graph.var(3.0, true);
        let y = graph.mul(x, 4.0)?;
        let exe = Executor::new(&graph, y)?;
        exe.forward(&mut graph)?;

        exe.backward(&mut graph, 2.5)?;
        assert_eq!(graph.grad(y)?, Some(2.5));
        check_grad_near(&graph, x, 10.0, 1e-12);
        Ok(())
    }

    #[test]
    fn test_backward_default_seed() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let x = graph.var(3.0, true);
        let y = graph.mul(x, 4.0)?;
        let exe = Executor::new(&graph, y)?;
        exe.backward_default(&mut graph)?;
        assert_eq!(graph.grad(y)?, Some(1.0));
        check_grad_near(&graph, x, 4.0, 1e-12);
        Ok(())
    }

    #[test]
    fn test_backward_accumulates_across_passes() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let x = graph.var(3.0, true);
        let y = graph.mul(x, 4.0)?;
        let exe = Executor::new(&graph, y)?;

        exe.backward(&mut graph, 1.0)?;
        exe.backward(&mut graph, 1.0)?;
        // The root is re-seeded, leaves keep summing.
        assert_eq!(graph.grad(y)?, Some(1.0));
        check_grad_near(&graph, x, 8.0, 1e-12);

        graph.zero_grad();
        exe.backward(&mut graph, 1.0)?;
        check_grad_near(&graph, x, 4.0, 1e-12);
        Ok(())
    }

    #[test]
    fn test_backward_through_non_grad_inputs() -> Result<(), ScalarGradError> {
        // Gradients reach every node input, whatever its requires_grad flag.
        let mut graph = Graph::new();
        let x = graph.var(2.0, true);
        let c = graph.var(7.0, false);
        let y = graph.mul(x, c)?;
        let exe = Executor::new(&graph, y)?;
        exe.backward(&mut graph, 1.0)?;
        check_grad_near(&graph, x, 7.0, 1e-12);
        check_grad_near(&graph, c, 2.0, 1e-12);
        Ok(())
    }

    #[test]
    fn test_nodes_outside_order_untouched() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let x = graph.var(2.0, true);
        let y = graph.mul(x, x)?;
        let exe = Executor::new(&graph, y)?;

        // Built after the executor: not part of its snapshot.
        let later = graph.add(y, 1.0)?;
        exe.forward(&mut graph)?;
        exe.backward(&mut graph, 1.0)?;
        assert_eq!(graph.grad(later)?, None);
        assert_eq!(exe.order().len(), 2);
        Ok(())
    }

    #[test]
    fn test_gradients_helper() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let x = graph.var(2.0, true);
        let unused = graph.var(1.0, true);
        let y = graph.ln(x)?;
        let exe = Executor::new(&graph, y)?;
        exe.backward(&mut graph, 1.0)?;
        assert_eq!(exe.gradients(&graph, &[x, unused])?, vec![0.5, 0.0]);
        Ok(())
    }

    #[test]
    fn test_executor_rejects_other_graph() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let x = graph.var(2.0, true);
        let exe = Executor::new(&graph, x)?;

        let mut other = Graph::new();
        let _ = other.var(2.0, true);
        let err = exe.forward(&mut other).unwrap_err();
        assert_eq!(
            err,
            ScalarGradError::GraphMismatch { expected: graph.id(), actual: other.id() }
        );
        assert!(exe.backward(&mut other, 1.0).is_err());
        Ok(())
    }

    #[test]
    fn test_backward_domain_error_aborts() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let x = graph.var(2.0, true);
        let y = graph.ln(x)?;
        let exe = Executor::new(&graph, y)?;

        // Move the leaf out of the domain without a forward pass.
        graph.set_value(x, 0.0)?;
        let err = exe.backward(&mut graph, 1.0).unwrap_err();
        assert!(matches!(err, ScalarGradError::DomainError { operator: "Ln", .. }));
        assert_eq!(graph.grad(x)?, None);
        Ok(())
    }

    #[test]
    fn test_debug_mode_runs() -> Result<(), ScalarGradError> {
        let mut graph = Graph::new();
        let x = graph.var(2.0, true);
        let y = graph.sin(x)?;
        let exe = Executor::new(&graph, y)?.with_debug(true);
        check_value_near(exe.forward(&mut graph)?, 2.0f64.sin(), 1e-12);
        exe.backward(&mut graph, 1.0)?;
        check_grad_near(&graph, x, 2.0f64.cos(), 1e-12);
        Ok(())
    }

    #[test]
    fn test_debug_trace_shows_values_and_grads() -> Result<(), ScalarGradError> {
        captured_lines();
        let mut graph = Graph::new();
        let x1 = graph.var(2.5, true);
        let x2 = graph.var(4.0, true);
        let y = graph.mul(x1, x2)?;
        let exe = Executor::new(&graph, y)?.with_debug(true);
        exe.forward(&mut graph)?;
        exe.backward(&mut graph, 1.0)?;

        let lines = captured_lines();
        let expected = [
            "forward prop: <Node  2: op=Mul, inputs=[2.5, 4.0], value=10, requires_grad=true, grad=None>",
            "after backward: <Node  2: op=Mul, inputs=[2.5, 4.0], value=10, requires_grad=true, grad=Some(1.0)>",
            "after backward: <Node  0: op=Input, inputs=[2.5], value=2.5, requires_grad=true, grad=Some(4.0)>",
            "after backward: <Node  1: op=Input, inputs=[4.0], value=4, requires_grad=true, grad=Some(2.5)>",
        ];
        for line in expected {
            assert!(lines.iter().any(|l| l == line), "missing trace line {:?}", line);
        }
        Ok(())
    }
}
