// nanograd-core/src/value/autograd.rs

use crate::autograd::graph::topological_sort;
use crate::value::Value;

impl Value {
    /// Computes the gradient of this node with respect to every node it was
    /// derived from.
    ///
    /// Seeds `self.grad` to `1.0`, sorts the reachable graph topologically and
    /// runs each node's local backward rule exactly once, consumers first. When a
    /// node's rule runs, its own gradient is final.
    ///
    /// Gradients are accumulated, never reset: calling `backward()` twice without
    /// [`Value::zero_grad_graph`] (or zeroing the relevant nodes) adds the second
    /// pass on top of the first.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        log::debug!(
            "backward() from {:?}: {} reachable nodes",
            self.id(),
            sorted_nodes.len()
        );

        self.write_data().grad = 1.0;

        for node in sorted_nodes.iter().rev() {
            // Copy what the rule needs and release the borrow before touching
            // the operands.
            let (op, data, grad) = {
                let guard = node.read_data();
                (guard.op.clone(), guard.data, guard.grad)
            };
            op.backward(data, grad);
        }

        if sorted_nodes.iter().any(|n| !n.grad().is_finite()) {
            log::warn!("backward() produced non-finite gradients; check for domain errors (e.g. 0 ** negative)");
        }
    }

    /// Resets the gradient of this node and of every node reachable from it.
    pub fn zero_grad_graph(&self) {
        for node in topological_sort(self) {
            node.zero_grad();
        }
    }
}
