use crate::error::ScalarustError;
use crate::graph::Graph;
use crate::nn::Parameter;
use log::debug;

/// The base trait for network components (neurons, layers, networks).
///
/// Forward passes are inherent methods because their output shape differs
/// per component; the trait covers parameter enumeration and gradient reset.
pub trait Module: std::fmt::Debug {
    /// All learnable parameters, flattened in a stable order.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Parameters with hierarchical names, e.g. `layers.1.neurons.0.weight.2`.
    /// Same order as [`Module::parameters`].
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Sets the grad of every parameter to 0.
    ///
    /// Intermediate nodes of earlier forward passes are left alone; they are
    /// expected to be discarded (see [`Graph::truncate`]).
    fn zero_grad(&self, graph: &Graph) -> Result<(), ScalarustError> {
        let params = self.parameters();
        debug!("zero_grad: resetting {} parameters", params.len());
        for param in params {
            param.zero_grad(graph)?;
        }
        Ok(())
    }
}
