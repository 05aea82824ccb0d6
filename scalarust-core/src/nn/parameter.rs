use crate::error::ScalarustError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::scalar::Scalar;

/// A leaf node owned by a module and meant to be optimized.
///
/// A `Parameter` is only an id plus the generation stamp of its node: the
/// value and grad live in the [`Graph`] the parameter was created in, and
/// every accessor takes that graph. Once the graph is truncated below the
/// parameter, accessors report `UnknownNode`, also after newer nodes have
/// reused the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameter {
    id: NodeId,
    generation: u64,
}

impl Parameter {
    /// Wraps an existing leaf node.
    ///
    /// # Errors
    /// `NotALeaf` if `scalar` was produced by an operation.
    pub fn from_scalar(scalar: Scalar<'_>) -> Result<Self, ScalarustError> {
        if !scalar.is_leaf() {
            return Err(ScalarustError::NotALeaf(scalar.id()));
        }
        Ok(Parameter {
            id: scalar.id(),
            generation: scalar.generation(),
        })
    }

    /// Creates a fresh leaf holding `value`.
    pub(crate) fn leaf(graph: &Graph, value: f64) -> Self {
        Parameter {
            id: graph.scalar(value).id(),
            generation: graph.generation(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Handle to the parameter node, for use in expressions.
    pub fn scalar<'g>(&self, graph: &'g Graph) -> Result<Scalar<'g>, ScalarustError> {
        graph.get_stamped(self.id, self.generation)
    }

    pub fn value(&self, graph: &Graph) -> Result<f64, ScalarustError> {
        Ok(self.scalar(graph)?.value())
    }

    pub fn grad(&self, graph: &Graph) -> Result<f64, ScalarustError> {
        Ok(self.scalar(graph)?.grad())
    }

    /// Overwrites the parameter value (an optimizer step).
    pub fn set_value(&self, graph: &Graph, value: f64) -> Result<(), ScalarustError> {
        self.scalar(graph)?.set_value(value)
    }

    pub fn zero_grad(&self, graph: &Graph) -> Result<(), ScalarustError> {
        self.scalar(graph)?.zero_grad();
        Ok(())
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
