use crate::value::Value;
use std::fmt;

/// The operation that produced a node, carrying the node's operands.
///
/// This is the node's local backward rule. Instead of storing a boxed closure per
/// node, the rule is selected by matching on the variant, so adding a new
/// primitive means adding a variant here and a match arm in [`Op::backward`].
///
/// A node never has more than two operands. Negation, subtraction and division
/// are not primitives: they are composed from `Add`, `Mul` and `Pow`.
#[derive(Debug, Clone)]
pub enum Op {
    /// Input or parameter node. Its backward rule is a no-op.
    Leaf,
    Add(Value, Value),
    Mul(Value, Value),
    /// Base raised to a fixed scalar exponent (never a graph node).
    Pow(Value, f64),
    Exp(Value),
    Tanh(Value),
    Relu(Value),
}

/// Diagnostic tag identifying which operation produced a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpKind {
    Leaf,
    Add,
    Mul,
    Pow(f64),
    Exp,
    Tanh,
    Relu,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpKind::Leaf => write!(f, ""),
            OpKind::Add => write!(f, "+"),
            OpKind::Mul => write!(f, "*"),
            OpKind::Pow(exponent) => write!(f, "**{}", exponent),
            OpKind::Exp => write!(f, "exp"),
            OpKind::Tanh => write!(f, "tanh"),
            OpKind::Relu => write!(f, "relu"),
        }
    }
}

impl Op {
    pub fn kind(&self) -> OpKind {
        match self {
            Op::Leaf => OpKind::Leaf,
            Op::Add(..) => OpKind::Add,
            Op::Mul(..) => OpKind::Mul,
            Op::Pow(_, exponent) => OpKind::Pow(*exponent),
            Op::Exp(_) => OpKind::Exp,
            Op::Tanh(_) => OpKind::Tanh,
            Op::Relu(_) => OpKind::Relu,
        }
    }

    /// Returns the operands this node was derived from, in construction order.
    ///
    /// The same node may appear twice (e.g. `x * x`); the traversal deduplicates
    /// by identity, not here.
    pub fn inputs(&self) -> Vec<Value> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => vec![a.clone(), b.clone()],
            Op::Pow(a, _) | Op::Exp(a) | Op::Tanh(a) | Op::Relu(a) => vec![a.clone()],
        }
    }

    /// Consumes the op and returns its operands (used to dismantle graphs).
    pub(crate) fn into_inputs(self) -> Vec<Value> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow(a, _) | Op::Exp(a) | Op::Tanh(a) | Op::Relu(a) => vec![a],
        }
    }

    /// Pushes the gradient of the output node into its operands.
    ///
    /// `out_data` and `out_grad` are the producing node's value and its (final)
    /// accumulated gradient. Contributions are always added, never assigned, so
    /// an operand used twice receives both contributions.
    pub(crate) fn backward(&self, out_data: f64, out_grad: f64) {
        match self {
            Op::Leaf => {}
            Op::Add(a, b) => {
                a.accumulate_grad(out_grad);
                b.accumulate_grad(out_grad);
            }
            Op::Mul(a, b) => {
                let (a_data, b_data) = (a.data(), b.data());
                a.accumulate_grad(out_grad * b_data);
                b.accumulate_grad(out_grad * a_data);
            }
            Op::Pow(a, exponent) => {
                // No guard for a zero base with a negative (exponent - 1):
                // the resulting inf/NaN is propagated as is.
                let local = exponent * a.data().powf(exponent - 1.0);
                a.accumulate_grad(out_grad * local);
            }
            Op::Exp(a) => {
                a.accumulate_grad(out_grad * a.data().exp());
            }
            Op::Tanh(a) => {
                a.accumulate_grad(out_grad * (1.0 - out_data * out_data));
            }
            Op::Relu(a) => {
                let mask = if out_data > 0.0 { 1.0 } else { 0.0 };
                a.accumulate_grad(out_grad * mask);
            }
        }
    }
}
