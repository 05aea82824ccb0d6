// src/node.rs
use crate::autograd::Op;

/// Stable handle to a node inside a [`Graph`](crate::Graph) arena.
///
/// Node identity is the index, never the value: two leaves holding `1.0`
/// are distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Internal storage for a single scalar in the computation graph.
///
/// Nodes are created once, by a leaf constructor or by an operation, and are
/// only mutated afterwards through `grad` accumulation, gradient resets and
/// (for leaves) external value updates.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// Forward value, computed eagerly at construction.
    pub(crate) value: f64,
    /// Accumulated `d root / d self`. Zero until a backward pass reaches it.
    pub(crate) grad: f64,
    /// Operation that produced this node, carrying what its derivative needs.
    pub(crate) op: Op,
    /// Operands in order. Empty for leaves; `x * x` lists `x` twice.
    pub(crate) ancestors: Vec<NodeId>,
    /// Graph generation at creation, stamped when the node is pushed.
    pub(crate) generation: u64,
}

impl Node {
    pub(crate) fn leaf(value: f64) -> Self {
        Node {
            value,
            grad: 0.0,
            op: Op::Leaf,
            ancestors: Vec::new(),
            generation: 0,
        }
    }

    pub(crate) fn from_op(value: f64, op: Op, ancestors: Vec<NodeId>) -> Self {
        Node {
            value,
            grad: 0.0,
            op,
            ancestors,
            generation: 0,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.ancestors.is_empty()
    }
}
