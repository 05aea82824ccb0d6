use crate::nn::Activation;
use crate::node::NodeId;
use thiserror::Error;

/// Custom error type for the scalarust engine and network layer.
///
/// Numeric trouble (NaN, infinities) is never reported here: those values
/// propagate through the graph like any other number.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarustError {
    #[error("Arity mismatch: expected {expected} inputs, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("Unknown activation kind: '{0}'")]
    UnknownActivation(String),

    #[error("Layer config mismatch: {output_dims} output widths but {activations} activations")]
    LayerConfigMismatch {
        output_dims: usize,
        activations: usize,
    },

    #[error("Neurons of one layer must share an activation: expected {expected}, got {actual}")]
    ActivationMismatch {
        expected: Activation,
        actual: Activation,
    },

    #[error("A layer needs at least one neuron")]
    EmptyLayer,

    #[error("A network needs at least one layer")]
    EmptyNetwork,

    #[error("Node {id:?} does not exist in a graph of {len} nodes")]
    UnknownNode { id: NodeId, len: usize },

    #[error("Node {0:?} is not a leaf; only leaf values can be set")]
    NotALeaf(NodeId),

    #[error("Cycle detected in the computation graph during backward pass.")]
    CycleDetected,

    #[error("Operation {op} expects {expected} operands, got {actual}")]
    OperandCountMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },
}
