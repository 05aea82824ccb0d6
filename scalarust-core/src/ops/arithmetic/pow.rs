// scalarust-core/src/ops/arithmetic/pow.rs

use crate::autograd::Op;
use crate::graph::Graph;
use crate::scalar::{Operand, Scalar};

/// Raises `base` to a constant real `exponent`.
///
/// The exponent is a plain number, never a node, so only the base receives a
/// gradient: `exponent * base^(exponent - 1) * grad`. A negative base with a
/// fractional exponent yields NaN, which propagates like any other value.
pub fn pow_op<'g>(graph: &'g Graph, base: impl Into<Operand<'g>>, exponent: f64) -> Scalar<'g> {
    let base = graph.resolve(base.into());
    let value = graph.value_of(base).powf(exponent);
    graph.push_op(value, Op::Pow { exponent }, vec![base])
}

impl<'g> Scalar<'g> {
    /// `self ^ exponent`. See [`pow_op`].
    pub fn pow(self, exponent: f64) -> Scalar<'g> {
        pow_op(self.graph(), self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
