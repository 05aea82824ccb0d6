use crate::error::ScalarustError;
use crate::node::{Node, NodeId};
use std::collections::HashSet;

/// Orders every node reachable from `root` through the ancestor relation in
/// post-order: a node appears only after all of its ancestors.
///
/// Iterating the result in reverse therefore visits the root first and every
/// node after all of its dependents. The traversal uses an explicit stack, so
/// deep expressions (long chains, many-layer networks) cannot overflow the
/// call stack. Ancestors are visited in operand order, which makes the order
/// deterministic. Nodes are keyed by [`NodeId`], so nodes with equal values are
/// still visited separately and a shared node is visited once.
///
/// # Errors
/// * `CycleDetected` if a node is reached again while it is still on the
///   current path.
/// * `UnknownNode` if an id points past the end of `nodes`.
pub(crate) fn topological_sort(
    nodes: &[Node],
    root: NodeId,
) -> Result<Vec<NodeId>, ScalarustError> {
    let lookup = |id: NodeId| {
        nodes.get(id.0).ok_or(ScalarustError::UnknownNode {
            id,
            len: nodes.len(),
        })
    };
    lookup(root)?;

    let mut sorted = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut on_path: HashSet<NodeId> = HashSet::new();
    // (node, index of the next ancestor to descend into)
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    on_path.insert(root);

    while let Some(frame) = stack.last_mut() {
        let (id, next) = *frame;
        match lookup(id)?.ancestors.get(next) {
            Some(&ancestor) => {
                frame.1 += 1;
                if visited.contains(&ancestor) {
                    continue;
                }
                if !on_path.insert(ancestor) {
                    return Err(ScalarustError::CycleDetected);
                }
                lookup(ancestor)?;
                stack.push((ancestor, 0));
            }
            None => {
                stack.pop();
                on_path.remove(&id);
                visited.insert(id);
                sorted.push(id);
            }
        }
    }

    Ok(sorted)
}

#[cfg(test)]
#[path = "toposort_test.rs"]
mod tests;
