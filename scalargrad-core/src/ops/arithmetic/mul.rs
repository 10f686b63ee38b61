use crate::error::ScalarGradError;
use crate::ops::{check_arity, Operator};

/// Binary multiplication \( z = a \cdot b \).
#[derive(Debug, Clone, Copy, Default)]
pub struct MulOp;

/// Shared multiplication instance.
pub static MUL: MulOp = MulOp;

impl Operator for MulOp {
    fn name(&self) -> &'static str {
        "Mul"
    }

    fn arity(&self) -> usize {
        2
    }

    fn forward(&self, inputs: &[f64]) -> Result<f64, ScalarGradError> {
        check_arity(self, inputs)?;
        Ok(inputs[0] * inputs[1])
    }

    /// For \( z = a \cdot b \): \( dL/da = dL/dz \cdot b \) and \( dL/db = dL/dz \cdot a \).
    fn backward(&self, inputs: &[f64], output_grad: f64) -> Result<Vec<f64>, ScalarGradError> {
        check_arity(self, inputs)?;
        Ok(vec![inputs[1] * output_grad, inputs[0] * output_grad])
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
