use crate::error::ScalarGradError;
use crate::ops::{check_arity, Operator};

/// Natural exponential \( z = e^a \).
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpOp;

/// Shared exponential instance.
pub static EXP: ExpOp = ExpOp;

impl Operator for ExpOp {
    fn name(&self) -> &'static str {
        "Exp"
    }

    fn arity(&self) -> usize {
        1
    }

    fn forward(&self, inputs: &[f64]) -> Result<f64, ScalarGradError> {
        check_arity(self, inputs)?;
        Ok(inputs[0].exp())
    }

    fn backward(&self, inputs: &[f64], output_grad: f64) -> Result<Vec<f64>, ScalarGradError> {
        check_arity(self, inputs)?;
        Ok(vec![inputs[0].exp() * output_grad])
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
