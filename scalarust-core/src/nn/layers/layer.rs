use crate::error::ScalarustError;
use crate::graph::Graph;
use crate::nn::{Activation, Module, Neuron, Parameter};
use crate::scalar::{Operand, Scalar};
use log::debug;
use rand::Rng;

/// Output of a [`Layer`]: a bare node when the layer has exactly one neuron,
/// the ordered outputs otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerOutput<'g> {
    Single(Scalar<'g>),
    Many(Vec<Scalar<'g>>),
}

impl<'g> LayerOutput<'g> {
    pub fn len(&self) -> usize {
        match self {
            LayerOutput::Single(_) => 1,
            LayerOutput::Many(outputs) => outputs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The node of a single-neuron output.
    pub fn single(&self) -> Option<Scalar<'g>> {
        match self {
            LayerOutput::Single(out) => Some(*out),
            LayerOutput::Many(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<Scalar<'g>> {
        match self {
            LayerOutput::Single(out) => vec![out],
            LayerOutput::Many(outputs) => outputs,
        }
    }

    pub fn values(&self) -> Vec<f64> {
        self.clone().into_vec().iter().map(|out| out.value()).collect()
    }
}

/// Neurons sharing one input width and one activation, evaluated on the same
/// input.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates `n_outputs` randomly initialized neurons over `n_inputs`
    /// inputs, using the thread-local RNG.
    ///
    /// # Errors
    /// `EmptyLayer` if `n_outputs` is 0.
    pub fn new(
        graph: &Graph,
        n_inputs: usize,
        n_outputs: usize,
        activation: Activation,
    ) -> Result<Self, ScalarustError> {
        Self::with_rng(graph, n_inputs, n_outputs, activation, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        graph: &Graph,
        n_inputs: usize,
        n_outputs: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarustError> {
        if n_outputs == 0 {
            return Err(ScalarustError::EmptyLayer);
        }
        let neurons = (0..n_outputs)
            .map(|_| Neuron::with_rng(graph, n_inputs, activation, rng))
            .collect();
        debug!(
            "Layer: {} -> {} ({})",
            n_inputs, n_outputs, activation
        );
        Ok(Layer { neurons })
    }

    /// Builds a layer from existing neurons.
    ///
    /// # Errors
    /// * `EmptyLayer` if `neurons` is empty.
    /// * `ArityMismatch` if the neurons do not share one input width.
    /// * `ActivationMismatch` if they do not share one activation.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalarustError> {
        let first = neurons.first().ok_or(ScalarustError::EmptyLayer)?;
        let (n_inputs, activation) = (first.n_inputs(), first.activation());
        for neuron in &neurons[1..] {
            if neuron.n_inputs() != n_inputs {
                return Err(ScalarustError::ArityMismatch {
                    expected: n_inputs,
                    actual: neuron.n_inputs(),
                });
            }
            if neuron.activation() != activation {
                return Err(ScalarustError::ActivationMismatch {
                    expected: activation,
                    actual: neuron.activation(),
                });
            }
        }
        Ok(Layer { neurons })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn n_inputs(&self) -> usize {
        self.neurons[0].n_inputs()
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }

    pub fn activation(&self) -> Activation {
        self.neurons[0].activation()
    }

    /// Evaluates every neuron on `inputs`.
    pub fn forward<'g, I>(
        &self,
        graph: &'g Graph,
        inputs: &[I],
    ) -> Result<LayerOutput<'g>, ScalarustError>
    where
        I: Into<Operand<'g>> + Copy,
    {
        let mut outputs = self
            .neurons
            .iter()
            .map(|neuron| neuron.forward(graph, inputs))
            .collect::<Result<Vec<_>, _>>()?;
        if outputs.len() == 1 {
            if let Some(out) = outputs.pop() {
                return Ok(LayerOutput::Single(out));
            }
        }
        Ok(LayerOutput::Many(outputs))
    }
}

impl Module for Layer {
    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, neuron)| {
                neuron
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neurons.{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
