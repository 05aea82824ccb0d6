// src/graph.rs
use crate::autograd::Op;
use crate::error::ScalarustError;
use crate::node::{Node, NodeId};
use crate::scalar::{Operand, Scalar};
use log::debug;
use std::cell::{Ref, RefCell, RefMut};

/// Arena owning every node of a computation graph.
///
/// Nodes reference their operands by [`NodeId`], so the graph is a plain
/// vector and can never contain reference cycles. `RefCell` gives the interior
/// mutability needed to create nodes and accumulate gradients through the
/// shared `&Graph` held by every [`Scalar`] handle. A `Graph` is meant to be
/// driven from a single thread.
///
/// The usual lifecycle is: create parameters, remember [`Graph::len`], run a
/// forward and backward pass, then [`Graph::truncate`] back to the mark so the
/// next pass starts from the parameters only.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: RefCell<Vec<Node>>,
    /// Bumped by every truncation that drops nodes. Each node is stamped with
    /// the value current when it was pushed, so a slot refilled after a
    /// truncation carries a newer stamp than the node it replaced.
    generation: u64,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: RefCell::new(Vec::with_capacity(capacity)),
            generation: 0,
        }
    }

    /// Creates a leaf node (constant or trainable parameter).
    pub fn scalar(&self, value: f64) -> Scalar<'_> {
        let id = self.push(Node::leaf(value));
        Scalar::new(self, id)
    }

    /// Re-acquires a handle for a node created earlier.
    ///
    /// A bare `NodeId` does not remember which node it named: once a
    /// truncation drops `id` and new nodes are pushed, `id` names the new
    /// node. [`Parameter`](crate::nn::Parameter) keeps a generation stamp and
    /// rejects such reuse.
    ///
    /// # Errors
    /// `UnknownNode` if the arena has been truncated below `id`.
    pub fn get(&self, id: NodeId) -> Result<Scalar<'_>, ScalarustError> {
        self.check(id)?;
        Ok(Scalar::new(self, id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.len()
    }

    /// Number of nodes currently in the arena.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every node created at or after position `len`.
    ///
    /// Taking `&mut self` guarantees no [`Scalar`] handle is alive, so no
    /// handle can observe a discarded node. Stored [`NodeId`]s below `len`
    /// stay valid. Ids at or above it are reported as `UnknownNode` by
    /// [`Graph::get`] until new nodes refill their slots;
    /// [`Parameter`](crate::nn::Parameter) lookups keep failing after that.
    pub fn truncate(&mut self, len: usize) {
        let nodes = self.nodes.get_mut();
        if len < nodes.len() {
            debug!("Graph: truncating {} nodes down to {}", nodes.len(), len);
            nodes.truncate(len);
            self.generation += 1;
        }
    }

    pub fn clear(&mut self) {
        self.truncate(0);
    }

    pub(crate) fn push(&self, mut node: Node) -> NodeId {
        node.generation = self.generation;
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        NodeId(nodes.len() - 1)
    }

    /// Turns an operand into a node of this graph, promoting literals to
    /// fresh constant leaves.
    ///
    /// Panics if a node operand was created in another graph.
    pub(crate) fn resolve<'g>(&'g self, operand: Operand<'g>) -> NodeId {
        match operand {
            Operand::Node(scalar) => {
                assert!(
                    std::ptr::eq(scalar.graph(), self),
                    "operand {:?} belongs to a different graph",
                    scalar.id()
                );
                scalar.id()
            }
            Operand::Literal(value) => self.push(Node::leaf(value)),
        }
    }

    /// Appends the result of an operation and returns its handle.
    pub(crate) fn push_op(&self, value: f64, op: Op, ancestors: Vec<NodeId>) -> Scalar<'_> {
        let id = self.push(Node::from_op(value, op, ancestors));
        Scalar::new(self, id)
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Handle to `id` if it still holds the node stamped with `generation`.
    ///
    /// # Errors
    /// `UnknownNode` if `id` is past the end, or if its slot was emptied by a
    /// truncation and refilled since.
    pub(crate) fn get_stamped(&self, id: NodeId, generation: u64) -> Result<Scalar<'_>, ScalarustError> {
        let nodes = self.nodes();
        let live = nodes.get(id.0).map_or(false, |node| node.generation == generation);
        let len = nodes.len();
        drop(nodes);
        if live {
            Ok(Scalar::new(self, id))
        } else {
            Err(ScalarustError::UnknownNode { id, len })
        }
    }

    pub(crate) fn value_of(&self, id: NodeId) -> f64 {
        self.nodes()[id.0].value
    }

    pub(crate) fn check(&self, id: NodeId) -> Result<(), ScalarustError> {
        let len = self.len();
        if id.0 < len {
            Ok(())
        } else {
            Err(ScalarustError::UnknownNode { id, len })
        }
    }

    pub(crate) fn nodes(&self) -> Ref<'_, Vec<Node>> {
        self.nodes.borrow()
    }

    pub(crate) fn nodes_mut(&self) -> RefMut<'_, Vec<Node>> {
        self.nodes.borrow_mut()
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
