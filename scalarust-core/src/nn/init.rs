//! Parameter initialization.

use crate::graph::Graph;
use crate::nn::Parameter;
use rand::Rng;

/// New parameter drawn uniformly from `[low, high]`.
///
/// Panics if `low > high`.
pub fn uniform<R: Rng + ?Sized>(graph: &Graph, low: f64, high: f64, rng: &mut R) -> Parameter {
    Parameter::leaf(graph, rng.gen_range(low..=high))
}

/// New parameter holding 0.
pub fn zeros(graph: &Graph) -> Parameter {
    constant(graph, 0.0)
}

/// New parameter holding `value`.
pub fn constant(graph: &Graph, value: f64) -> Parameter {
    Parameter::leaf(graph, value)
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
