use crate::autograd::Op;
use std::rc::Rc;

/// Internal storage of a single scalar node in the computation graph.
///
/// `Value` is a thin handle (`Rc<RefCell<ValueData>>`) around this struct. Only
/// `grad` and `data` are ever written after creation; `op` (and the operands it
/// carries) is fixed for the lifetime of the node.
#[derive(Debug)]
pub struct ValueData {
    /// Result of the operation that produced this node, or the leaf input.
    pub data: f64,
    /// Accumulated d(root)/d(self). Starts at 0.
    pub grad: f64,
    /// Producing operation together with its operands.
    pub op: Op,
    /// Optional diagnostic name (e.g. "x1", "w1").
    pub label: Option<String>,
}

impl ValueData {
    pub(crate) fn new(data: f64, op: Op) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op,
            label: None,
        }
    }
}

impl Drop for ValueData {
    /// Dismantles the operand chain iteratively.
    ///
    /// The default drop glue would recurse once per graph level and can blow the
    /// stack on long chains. Operands still referenced elsewhere are left alone.
    fn drop(&mut self) {
        let mut pending = std::mem::replace(&mut self.op, Op::Leaf).into_inputs();
        while let Some(value) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(value.data) {
                let mut inner = cell.into_inner();
                pending.extend(std::mem::replace(&mut inner.op, Op::Leaf).into_inputs());
            }
        }
    }
}
