// scalargrad-core/src/ops/arithmetic/div.rs

use crate::error::ScalarGradError;
use crate::ops::{check_arity, domain_error, Operator};

/// Binary division \( z = a / b \).
///
/// A zero denominator is rejected in both passes with a `DomainError` instead of producing
/// an infinite or NaN value.
#[derive(Debug, Clone, Copy, Default)]
pub struct DivOp;

/// Shared division instance.
pub static DIV: DivOp = DivOp;

impl Operator for DivOp {
    fn name(&self) -> &'static str {
        "Div"
    }

    fn arity(&self) -> usize {
        2
    }

    fn forward(&self, inputs: &[f64]) -> Result<f64, ScalarGradError> {
        check_arity(self, inputs)?;
        if inputs[1] == 0.0 {
            return Err(domain_error(self, "division by zero", inputs));
        }
        Ok(inputs[0] / inputs[1])
    }

    /// For \( z = a / b \):
    /// \( dL/da = dL/dz \cdot 1/b \) and \( dL/db = dL/dz \cdot (-a / b^2) \).
    fn backward(&self, inputs: &[f64], output_grad: f64) -> Result<Vec<f64>, ScalarGradError> {
        check_arity(self, inputs)?;
        let (a, b) = (inputs[0], inputs[1]);
        if b == 0.0 {
            return Err(domain_error(self, "division by zero", inputs));
        }
        Ok(vec![output_grad / b, -a * output_grad / (b * b)])
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
