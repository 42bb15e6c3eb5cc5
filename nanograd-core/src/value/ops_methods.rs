//! Method forms of the operations in [`crate::ops`].

use crate::error::NanogradError;
use crate::ops::{
    add_op, div_op, exp_op, mul_op, neg_op, pow_op, relu_op, sub_op, tanh_op, try_pow_op, Operand,
};
use crate::value::Value;

impl Value {
    /// `self + other`. A plain number is wrapped in a new leaf first.
    pub fn add(&self, other: impl Into<Operand>) -> Value {
        add_op(self, &other.into().into_value())
    }

    /// `self * other`. A plain number is wrapped in a new leaf first.
    pub fn mul(&self, other: impl Into<Operand>) -> Value {
        mul_op(self, &other.into().into_value())
    }

    pub fn neg(&self) -> Value {
        neg_op(self)
    }

    pub fn sub(&self, other: impl Into<Operand>) -> Value {
        sub_op(self, &other.into().into_value())
    }

    pub fn div(&self, other: impl Into<Operand>) -> Value {
        div_op(self, &other.into().into_value())
    }

    /// `self ** exponent` for a constant exponent.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }

    /// `self ** exponent`, failing if `exponent` is a graph node.
    pub fn try_pow(&self, exponent: impl Into<Operand>) -> Result<Value, NanogradError> {
        try_pow_op(self, exponent.into())
    }

    pub fn exp(&self) -> Value {
        exp_op(self)
    }

    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }

    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}
