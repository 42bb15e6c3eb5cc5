use crate::autograd::OpKind;
use crate::value::Value;

impl Value {
    /// Returns the numeric value of this node.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Returns the gradient accumulated by the last `backward()` call(s).
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the numeric value. Meant for parameter updates between steps;
    /// nodes already derived from this one keep their old results.
    pub fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Adds `delta` to the numeric value (e.g. `-lr * grad` in gradient descent).
    pub fn adjust_data(&self, delta: f64) {
        self.write_data().data += delta;
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    pub(crate) fn accumulate_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    /// Diagnostic tag of the operation that produced this node.
    pub fn op_kind(&self) -> OpKind {
        self.read_data().op.kind()
    }

    /// The nodes this node was derived from (empty for leaves).
    pub fn operands(&self) -> Vec<Value> {
        self.read_data().op.inputs()
    }

    pub fn is_leaf(&self) -> bool {
        self.op_kind() == OpKind::Leaf
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }
}
