// Export foundational arithmetic operations directly
pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod sub;

// Re-export the operator types and their shared instances
pub use add::{AddOp, ADD};
pub use div::{DivOp, DIV};
pub use mul::{MulOp, MUL};
pub use neg::{NegOp, NEG};
pub use sub::{SubOp, SUB};
