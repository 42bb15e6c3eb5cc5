use crate::value::{NodeId, Value};
use std::collections::HashSet;

/// Builds a topological ordering of every node reachable from `root`.
///
/// Depth-first, post-order: a node is appended only after all of its operands
/// have been appended, so the returned vector lists operands before the nodes
/// that consume them and `root` comes last. Walking it in reverse therefore
/// visits every consumer of a node before the node itself.
///
/// Nodes are deduplicated by identity (`NodeId`, the allocation address), never
/// by numeric value: two distinct nodes holding the same number are both kept,
/// and a node reachable through several paths appears exactly once.
///
/// Uses an explicit stack instead of recursion so long chains (e.g. a loss
/// summed over many samples) do not exhaust the call stack.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // (node, operands_done)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, operands_done)) = stack.pop() {
        if operands_done {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            continue;
        }

        let inputs = node.read_data().op.inputs();
        stack.push((node, true));
        // Reverse so the first operand is explored first.
        for input in inputs.into_iter().rev() {
            if !visited.contains(&input.id()) {
                stack.push((input, false));
            }
        }
    }

    sorted_list
}
