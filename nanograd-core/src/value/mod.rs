// nanograd-core/src/value/mod.rs

use crate::autograd::Op;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

pub mod accessors;
pub mod autograd;
pub mod ops_methods;


/// Stable identity of a node: the address of its shared allocation.
///
/// Used to deduplicate nodes during graph traversal. Two nodes with equal
/// `data` are still different nodes.
pub type NodeId = *const RefCell<ValueData>;

/// A scalar node in a dynamically built computation graph.
///
/// `Value` is a cheap handle: cloning it clones the `Rc`, not the node, so a
/// clone refers to the same node (same data, same gradient, same identity).
/// Nodes are created either as leaves ([`Value::new`]) or by applying an
/// operation to existing nodes (`add`, `mul`, `tanh`, ...). The numeric result
/// is computed eagerly; gradients are computed by [`Value::backward`].
///
/// The handle is `!Send` and `!Sync`: a graph lives on a single thread.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node holding `data`, with zero gradient.
    pub fn new(data: f64) -> Self {
        Value::from_op(data, Op::Leaf)
    }

    /// Creates a labelled leaf node.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        let value = Value::new(data);
        value.set_label(label);
        value
    }

    /// Wraps each number of `inputs` in a fresh leaf.
    pub fn leaves(inputs: &[f64]) -> Vec<Value> {
        inputs.iter().map(|&x| Value::new(x)).collect()
    }

    /// Creates a node produced by `op`. `data` is the already computed result.
    pub(crate) fn from_op(data: f64, op: Op) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::new(data, op))),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// Returns the identity token of this node.
    pub fn id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Returns `true` if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl fmt::Debug for Value {
    // Shallow on purpose: printing operands would walk the whole graph.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        let mut s = f.debug_struct("Value");
        if let Some(label) = guard.label.as_ref() {
            s.field("label", label);
        }
        s.field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("op", &guard.op.kind())
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(
            f,
            "Value(data = {}, grad = {} and op = {})",
            guard.data,
            guard.grad,
            guard.op.kind()
        )
    }
}
