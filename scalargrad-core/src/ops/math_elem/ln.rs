// scalargrad-core/src/ops/math_elem/ln.rs

use crate::error::ScalarGradError;
use crate::ops::{check_arity, domain_error, Operator};

/// Natural logarithm (base \( e \)).
///
/// # Domain Considerations
/// The natural logarithm is only defined for strictly positive numbers. Non-positive (and NaN)
/// operands are rejected with a `DomainError` in both passes; the gradient \( 1/x \) is
/// undefined at \( x = 0 \) as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct LnOp;

/// Shared logarithm instance.
pub static LN: LnOp = LnOp;

impl LnOp {
    fn check_domain(&self, inputs: &[f64]) -> Result<(), ScalarGradError> {
        let a = inputs[0];
        if a.is_nan() || a <= 0.0 {
            return Err(domain_error(self, "logarithm of a non-positive operand", inputs));
        }
        Ok(())
    }
}

impl Operator for LnOp {
    fn name(&self) -> &'static str {
        "Ln"
    }

    fn arity(&self) -> usize {
        1
    }

    fn forward(&self, inputs: &[f64]) -> Result<f64, ScalarGradError> {
        check_arity(self, inputs)?;
        self.check_domain(inputs)?;
        Ok(inputs[0].ln())
    }

    /// Computes the gradient for \( z = \ln(a) \):
    /// \\[ \frac{dL}{da} = \frac{dL}{dz} \cdot \frac{1}{a} \\]
    fn backward(&self, inputs: &[f64], output_grad: f64) -> Result<Vec<f64>, ScalarGradError> {
        check_arity(self, inputs)?;
        self.check_domain(inputs)?;
        Ok(vec![output_grad / inputs[0]])
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "ln_test.rs"]
mod tests; // Link to the test file
