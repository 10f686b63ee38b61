use crate::error::ScalarGradError;
use crate::ops::{check_arity, Operator};

/// Binary subtraction \( z = a - b \).
#[derive(Debug, Clone, Copy, Default)]
pub struct SubOp;

/// Shared subtraction instance.
pub static SUB: SubOp = SubOp;

impl Operator for SubOp {
    fn name(&self) -> &'static str {
        "Sub"
    }

    fn arity(&self) -> usize {
        2
    }

    fn forward(&self, inputs: &[f64]) -> Result<f64, ScalarGradError> {
        check_arity(self, inputs)?;
        Ok(inputs[0] - inputs[1])
    }

    fn backward(&self, inputs: &[f64], output_grad: f64) -> Result<Vec<f64>, ScalarGradError> {
        check_arity(self, inputs)?;
        // dz/da = 1, dz/db = -1
        Ok(vec![output_grad, -output_grad])
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
