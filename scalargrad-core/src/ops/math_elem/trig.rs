use crate::error::ScalarGradError;
use crate::ops::{check_arity, Operator};

/// Sine \( z = \sin(a) \), with \( dz/da = \cos(a) \).
#[derive(Debug, Clone, Copy, Default)]
pub struct SinOp;

/// Shared sine instance.
pub static SIN: SinOp = SinOp;

impl Operator for SinOp {
    fn name(&self) -> &'static str {
        "Sin"
    }

    fn arity(&self) -> usize {
        1
    }

    fn forward(&self, inputs: &[f64]) -> Result<f64, ScalarGradError> {
        check_arity(self, inputs)?;
        Ok(inputs[0].sin())
    }

    fn backward(&self, inputs: &[f64], output_grad: f64) -> Result<Vec<f64>, ScalarGradError> {
        check_arity(self, inputs)?;
        Ok(vec![inputs[0].cos() * output_grad])
    }
}

/// Cosine \( z = \cos(a) \), with \( dz/da = -\sin(a) \).
#[derive(Debug, Clone, Copy, Default)]
pub struct CosOp;

/// Shared cosine instance.
pub static COS: CosOp = CosOp;

impl Operator for CosOp {
    fn name(&self) -> &'static str {
        "Cos"
    }

    fn arity(&self) -> usize {
        1
    }

    fn forward(&self, inputs: &[f64]) -> Result<f64, ScalarGradError> {
        check_arity(self, inputs)?;
        Ok(inputs[0].cos())
    }

    fn backward(&self, inputs: &[f64], output_grad: f64) -> Result<Vec<f64>, ScalarGradError> {
        check_arity(self, inputs)?;
        Ok(vec![-inputs[0].sin() * output_grad])
    }
}

#[cfg(test)]
#[path = "trig_test.rs"]
mod tests;
