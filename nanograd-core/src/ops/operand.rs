use crate::value::Value;

/// Right-hand side of a binary operation: either an existing node or a plain
/// number.
///
/// Plain numbers are coerced into fresh leaf nodes by [`Operand::into_value`], so
/// `x.add(2.0)` and `x.add(&Value::new(2.0))` build the same graph.
#[derive(Debug, Clone)]
pub enum Operand {
    Scalar(f64),
    Node(Value),
}

impl Operand {
    /// Returns the operand as a node, wrapping scalars in a new leaf.
    pub fn into_value(self) -> Value {
        match self {
            Operand::Scalar(x) => Value::new(x),
            Operand::Node(v) => v,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Operand::Node(_))
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Scalar(x)
    }
}

impl From<f32> for Operand {
    fn from(x: f32) -> Self {
        Operand::Scalar(x as f64)
    }
}

impl From<i32> for Operand {
    fn from(x: i32) -> Self {
        Operand::Scalar(x as f64)
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Node(v)
    }
}

impl From<&Value> for Operand {
    fn from(v: &Value) -> Self {
        Operand::Node(v.clone())
    }
}
