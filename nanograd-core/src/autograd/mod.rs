//! Reverse-mode differentiation machinery.
//!
//! * [`Op`]: per-node backward rule, stored as a tagged variant.
//! * `graph`: topological ordering of the nodes reachable from a root.
//! * [`grad_check`]: finite-difference verification of analytic gradients.
//!
//! The entry point is [`Value::backward`](crate::value::Value::backward).

pub mod backward_op;
pub mod grad_check;
pub(crate) mod graph;

pub use backward_op::{Op, OpKind};
