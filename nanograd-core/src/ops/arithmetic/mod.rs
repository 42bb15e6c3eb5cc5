//! Arithmetic operations on scalar nodes.
//!
//! `add`, `mul` and `pow` are primitives with their own backward rule. `neg`,
//! `sub` and `div` are compositions of those primitives.

pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::{pow_op, try_pow_op};
pub use sub::sub_op;
