// Declare the element function modules within math_elem
pub mod exp;
pub mod ln;
pub mod trig;

// Re-export the operator types and their shared instances
pub use exp::{ExpOp, EXP};
pub use ln::{LnOp, LN};
pub use trig::{CosOp, SinOp, COS, SIN};
