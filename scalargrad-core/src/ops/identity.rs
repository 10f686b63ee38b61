// scalargrad-core/src/ops/identity.rs

use crate::error::ScalarGradError;
use crate::ops::{check_arity, Operator};

/// Identity operator. Backs every input (`var`) node: the node's single constant input is
/// forwarded unchanged and the upstream gradient flows straight through.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityOp;

/// Shared identity instance.
pub static IDENTITY: IdentityOp = IdentityOp;

impl Operator for IdentityOp {
    fn name(&self) -> &'static str {
        "Input"
    }

    fn arity(&self) -> usize {
        1
    }

    fn forward(&self, inputs: &[f64]) -> Result<f64, ScalarGradError> {
        check_arity(self, inputs)?;
        Ok(inputs[0])
    }

    fn backward(&self, inputs: &[f64], output_grad: f64) -> Result<Vec<f64>, ScalarGradError> {
        check_arity(self, inputs)?;
        Ok(vec![output_grad])
    }
}
