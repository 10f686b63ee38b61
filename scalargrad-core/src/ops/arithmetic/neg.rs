use crate::error::ScalarGradError;
use crate::ops::{check_arity, Operator};

/// Unary negation \( z = -a \).
#[derive(Debug, Clone, Copy, Default)]
pub struct NegOp;

/// Shared negation instance.
pub static NEG: NegOp = NegOp;

impl Operator for NegOp {
    fn name(&self) -> &'static str {
        "Neg"
    }

    fn arity(&self) -> usize {
        1
    }

    fn forward(&self, inputs: &[f64]) -> Result<f64, ScalarGradError> {
        check_arity(self, inputs)?;
        Ok(-inputs[0])
    }

    fn backward(&self, inputs: &[f64], output_grad: f64) -> Result<Vec<f64>, ScalarGradError> {
        check_arity(self, inputs)?;
        Ok(vec![-output_grad])
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
