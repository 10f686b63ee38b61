//! # Scalar Operations Module (`ops`)
//!
//! Every primitive that can appear in a computation graph implements the [`Operator`] trait.
//! Operators are stateless unit structs exposed as `'static` singletons (e.g. [`ADD`], [`LN`]),
//! so every node applying the same primitive shares one instance.
//!
//! ## Structure:
//!
//! - [`arithmetic`]: binary arithmetic (add, sub, mul, div) and negation.
//! - [`math_elem`]: element functions (ln, exp, sin, cos).
//! - [`identity`]: the identity operator backing input (`var`) nodes.
//!
//! Client code can extend the primitive set by implementing [`Operator`] on its own type and
//! passing a `'static` instance to [`Graph::apply`](crate::graph::Graph::apply).

use crate::error::ScalarGradError;
use std::fmt::Debug;

pub mod arithmetic;
pub mod identity;
pub mod math_elem;

pub use arithmetic::{AddOp, DivOp, MulOp, NegOp, SubOp, ADD, DIV, MUL, NEG, SUB};
pub use identity::{IdentityOp, IDENTITY};
pub use math_elem::{CosOp, ExpOp, LnOp, SinOp, COS, EXP, LN, SIN};

/// Defines the forward/backward contract of a differentiable scalar primitive.
///
/// Implementations must be pure: the same inputs always produce the same outputs and no
/// internal state is read or written. The `Send + Sync` bounds allow a single instance to be
/// shared by every graph in the process.
pub trait Operator: Debug + Send + Sync {
    /// Human readable operator name, used in diagnostics and errors.
    fn name(&self) -> &'static str;

    /// Fixed number of inputs this operator accepts.
    fn arity(&self) -> usize;

    /// Computes the operator's output from the resolved input values.
    ///
    /// # Errors
    /// * `ArityError` if `inputs.len() != self.arity()`.
    /// * `DomainError` if the inputs fall outside the operator's domain.
    fn forward(&self, inputs: &[f64]) -> Result<f64, ScalarGradError>;

    /// Computes the vector-Jacobian product for a scalar output.
    ///
    /// Given the resolved input values and `output_grad` (dL/dOutput), returns
    /// `output_grad * dOutput/dInput_i` for every input position `i`.
    /// The returned `Vec` **must** have the same length and order as `inputs`.
    fn backward(&self, inputs: &[f64], output_grad: f64) -> Result<Vec<f64>, ScalarGradError>;
}

/// Returns an `ArityError` unless `inputs` has exactly `op.arity()` elements.
pub fn check_arity<O: Operator + ?Sized>(op: &O, inputs: &[f64]) -> Result<(), ScalarGradError> {
    if inputs.len() != op.arity() {
        return Err(ScalarGradError::ArityError {
            operator: op.name(),
            expected: op.arity(),
            actual: inputs.len(),
        });
    }
    Ok(())
}

/// Builds a `DomainError` carrying the operator name and the offending inputs.
pub fn domain_error<O: Operator + ?Sized>(
    op: &O,
    message: impl Into<String>,
    inputs: &[f64],
) -> ScalarGradError {
    ScalarGradError::DomainError {
        operator: op.name(),
        message: message.into(),
        values: inputs.to_vec(),
    }
}
