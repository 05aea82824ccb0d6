// src/scalar/mod.rs

use crate::autograd::Op;
use crate::error::ScalarustError;
use crate::graph::Graph;
use crate::node::NodeId;

mod autograd_methods;
mod operand;
mod traits;

pub use operand::Operand;

/// Handle to a node of a [`Graph`].
///
/// `Scalar` is `Copy`: it is just the graph reference plus the node index, so
/// a node can be used as an operand by any number of later expressions. All
/// arithmetic (`+ - * /`, unary `-`) and the activation methods create new
/// nodes in the same graph and never touch the operands.
///
/// Combining handles from two different graphs panics.
#[derive(Clone, Copy)]
pub struct Scalar<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> Scalar<'g> {
    pub(crate) fn new(graph: &'g Graph, id: NodeId) -> Self {
        Scalar { graph, id }
    }

    /// The graph that owns this node.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> f64 {
        self.graph.nodes()[self.id.0].value
    }

    /// `d root / d self` accumulated by every backward pass that reached this
    /// node since its creation or its last reset.
    pub fn grad(&self) -> f64 {
        self.graph.nodes()[self.id.0].grad
    }

    /// The operation that produced this node (`Op::Leaf` for leaves).
    pub fn op(&self) -> Op {
        self.graph.nodes()[self.id.0].op
    }

    pub(crate) fn generation(&self) -> u64 {
        self.graph.nodes()[self.id.0].generation
    }

    pub fn is_leaf(&self) -> bool {
        self.graph.nodes()[self.id.0].is_leaf()
    }

    /// Operands of the operation that produced this node, in order.
    pub fn ancestors(&self) -> Vec<Scalar<'g>> {
        self.graph.nodes()[self.id.0]
            .ancestors
            .iter()
            .map(|&id| Scalar::new(self.graph, id))
            .collect()
    }

    /// Overwrites the value of a leaf, e.g. for an optimizer step.
    ///
    /// Nodes already built on top of this leaf keep their old values; the
    /// next forward pass picks up the new one.
    ///
    /// # Errors
    /// `NotALeaf` if the node was produced by an operation.
    pub fn set_value(&self, value: f64) -> Result<(), ScalarustError> {
        let mut nodes = self.graph.nodes_mut();
        let node = &mut nodes[self.id.0];
        if !node.is_leaf() {
            return Err(ScalarustError::NotALeaf(self.id));
        }
        node.value = value;
        Ok(())
    }
}

#[cfg(test)]
#[path = "scalar_test.rs"]
mod tests;
