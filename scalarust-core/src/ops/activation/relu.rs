use crate::autograd::Op;
use crate::graph::Graph;
use crate::scalar::{Operand, Scalar};

/// Rectified linear unit: `max(0, x)`.
///
/// Backward passes the grad through only where the output is strictly
/// positive, so the gradient at exactly `x = 0` is 0. NaN inputs stay NaN.
pub fn relu_op<'g>(graph: &'g Graph, a: impl Into<Operand<'g>>) -> Scalar<'g> {
    let a = graph.resolve(a.into());
    let x = graph.value_of(a);
    let value = if x < 0.0 { 0.0 } else { x };
    graph.push_op(value, Op::Relu, vec![a])
}

impl<'g> Scalar<'g> {
    pub fn relu(self) -> Scalar<'g> {
        relu_op(self.graph(), self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
