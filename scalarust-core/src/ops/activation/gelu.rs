use crate::autograd::backward_op::{GELU_COEFF, SQRT_2_OVER_PI};
use crate::autograd::Op;
use crate::graph::Graph;
use crate::scalar::{Operand, Scalar};

/// GELU, tanh approximation:
/// `0.5 x (1 + tanh(sqrt(2/pi) (x + 0.044715 x^3)))`.
///
/// The inner tanh argument is cached in the node so the backward rule does
/// not recompute it.
pub fn gelu_op<'g>(graph: &'g Graph, a: impl Into<Operand<'g>>) -> Scalar<'g> {
    let a = graph.resolve(a.into());
    let x = graph.value_of(a);
    let inner = SQRT_2_OVER_PI * (x + GELU_COEFF * x * x * x);
    let value = 0.5 * x * (1.0 + inner.tanh());
    graph.push_op(value, Op::Gelu { inner }, vec![a])
}

impl<'g> Scalar<'g> {
    pub fn gelu(self) -> Scalar<'g> {
        gelu_op(self.graph(), self)
    }
}

#[cfg(test)]
#[path = "gelu_test.rs"]
mod tests;
