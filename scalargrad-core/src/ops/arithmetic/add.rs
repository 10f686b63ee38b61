use crate::error::ScalarGradError;
use crate::ops::{check_arity, Operator};

/// Binary addition \( z = a + b \).
#[derive(Debug, Clone, Copy, Default)]
pub struct AddOp;

/// Shared addition instance.
pub static ADD: AddOp = AddOp;

impl Operator for AddOp {
    fn name(&self) -> &'static str {
        "Add"
    }

    fn arity(&self) -> usize {
        2
    }

    fn forward(&self, inputs: &[f64]) -> Result<f64, ScalarGradError> {
        check_arity(self, inputs)?;
        Ok(inputs[0] + inputs[1])
    }

    /// Both partials are 1, so the upstream gradient is passed to each input unchanged.
    fn backward(&self, inputs: &[f64], output_grad: f64) -> Result<Vec<f64>, ScalarGradError> {
        check_arity(self, inputs)?;
        Ok(vec![output_grad, output_grad])
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
