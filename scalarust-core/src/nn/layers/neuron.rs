use crate::error::ScalarustError;
use crate::graph::Graph;
use crate::nn::{init, Activation, Module, Parameter};
use crate::ops::arithmetic::{add_op, mul_op};
use crate::scalar::{Operand, Scalar};
use rand::Rng;

/// A single unit: `activation(bias + sum_i w_i * x_i)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with weights drawn from `U[-1, 1]` and a zero bias,
    /// using the thread-local RNG.
    pub fn new(graph: &Graph, n_inputs: usize, activation: Activation) -> Self {
        Self::with_rng(graph, n_inputs, activation, &mut rand::thread_rng())
    }

    /// Same as [`Neuron::new`] with a caller-supplied RNG.
    pub fn with_rng<R: Rng + ?Sized>(
        graph: &Graph,
        n_inputs: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        let weights = (0..n_inputs)
            .map(|_| init::uniform(graph, -1.0, 1.0, rng))
            .collect();
        Neuron {
            weights,
            bias: init::zeros(graph),
            activation,
        }
    }

    /// Creates a neuron with explicit weights and bias.
    pub fn from_weights(graph: &Graph, weights: &[f64], bias: f64, activation: Activation) -> Self {
        Neuron {
            weights: weights.iter().map(|&w| init::constant(graph, w)).collect(),
            bias: init::constant(graph, bias),
            activation,
        }
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    /// Evaluates the neuron. The weighted sum starts from the bias and adds
    /// `w_i * x_i` in input order before the activation is applied.
    ///
    /// # Errors
    /// * `ArityMismatch` if `inputs.len()` differs from the weight count.
    /// * `UnknownNode` if the graph no longer holds the parameters.
    pub fn forward<'g, I>(&self, graph: &'g Graph, inputs: &[I]) -> Result<Scalar<'g>, ScalarustError>
    where
        I: Into<Operand<'g>> + Copy,
    {
        if inputs.len() != self.weights.len() {
            return Err(ScalarustError::ArityMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }

        let mut sum = self.bias.scalar(graph)?;
        for (weight, &input) in self.weights.iter().zip(inputs) {
            let product = mul_op(graph, weight.scalar(graph)?, input);
            sum = add_op(graph, sum, product);
        }
        Ok(self.activation.apply(sum))
    }
}

impl Module for Neuron {
    fn parameters(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params: Vec<(String, &Parameter)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight.{}", i), w))
            .collect();
        params.push(("bias".to_string(), &self.bias));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
