// nanograd-core/src/ops/mod.rs

//! Operations that build new nodes from existing ones.
//!
//! Every operation evaluates its result eagerly and records its operands in the
//! new node's [`Op`](crate::autograd::Op). Free functions (`add_op`, `tanh_op`,
//! ...) are the primitives; `Value` exposes them as methods and through the
//! standard operator traits.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod operand;
mod overloads;

pub use activation::relu_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op, try_pow_op};
pub use math_elem::{exp_op, tanh_op};
pub use operand::Operand;
