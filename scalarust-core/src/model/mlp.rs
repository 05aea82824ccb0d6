use crate::error::ScalarustError;
use crate::graph::Graph;
use crate::nn::{Activation, Layer, LayerOutput, Module, Parameter};
use crate::scalar::{Operand, Scalar};
use log::debug;
use rand::Rng;

/// A feed-forward stack of [`Layer`]s. Each layer consumes the previous
/// layer's outputs; the last layer's output is the network output.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds a network with `output_dims.len()` layers. Layer `i` has
    /// `output_dims[i]` neurons using `activations[i]`.
    ///
    /// # Errors
    /// * `LayerConfigMismatch` if the two slices differ in length.
    /// * `EmptyNetwork` if they are both empty.
    /// * `EmptyLayer` if any width is 0.
    pub fn new(
        graph: &Graph,
        n_inputs: usize,
        output_dims: &[usize],
        activations: &[Activation],
    ) -> Result<Self, ScalarustError> {
        Self::with_rng(graph, n_inputs, output_dims, activations, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        graph: &Graph,
        n_inputs: usize,
        output_dims: &[usize],
        activations: &[Activation],
        rng: &mut R,
    ) -> Result<Self, ScalarustError> {
        if output_dims.len() != activations.len() {
            return Err(ScalarustError::LayerConfigMismatch {
                output_dims: output_dims.len(),
                activations: activations.len(),
            });
        }
        if output_dims.is_empty() {
            return Err(ScalarustError::EmptyNetwork);
        }

        let mut layers = Vec::with_capacity(output_dims.len());
        let mut width = n_inputs;
        for (&n_outputs, &activation) in output_dims.iter().zip(activations) {
            layers.push(Layer::with_rng(graph, width, n_outputs, activation, rng)?);
            width = n_outputs;
        }
        debug!(
            "Mlp: {} inputs, widths {:?}, {} parameters",
            n_inputs,
            output_dims,
            layers.iter().map(|l| l.num_parameters()).sum::<usize>()
        );
        Ok(Mlp { layers })
    }

    /// Chains existing layers. Each layer's input width must equal the
    /// previous layer's output width.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, ScalarustError> {
        if layers.is_empty() {
            return Err(ScalarustError::EmptyNetwork);
        }
        for pair in layers.windows(2) {
            if pair[1].n_inputs() != pair[0].n_outputs() {
                return Err(ScalarustError::ArityMismatch {
                    expected: pair[0].n_outputs(),
                    actual: pair[1].n_inputs(),
                });
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn n_inputs(&self) -> usize {
        self.layers[0].n_inputs()
    }

    pub fn n_outputs(&self) -> usize {
        self.layers[self.layers.len() - 1].n_outputs()
    }

    /// Runs `inputs` through every layer in order.
    ///
    /// # Errors
    /// `ArityMismatch` if `inputs.len()` differs from the first layer's input
    /// width.
    pub fn forward<'g, I>(
        &self,
        graph: &'g Graph,
        inputs: &[I],
    ) -> Result<LayerOutput<'g>, ScalarustError>
    where
        I: Into<Operand<'g>> + Copy,
    {
        let (last, hidden) = self
            .layers
            .split_last()
            .ok_or(ScalarustError::EmptyNetwork)?;

        let mut current: Vec<Operand<'g>> = inputs.iter().map(|&x| x.into()).collect();
        for layer in hidden {
            let outputs: Vec<Scalar<'g>> = layer.forward(graph, current.as_slice())?.into_vec();
            current = outputs.into_iter().map(Operand::from).collect();
        }
        last.forward(graph, current.as_slice())
    }
}

impl Module for Mlp {
    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                params.push((format!("layers.{}.{}", i, name), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
