use crate::autograd::Op;
use crate::graph::Graph;
use crate::scalar::{Operand, Scalar};

/// Hyperbolic tangent. Backward: `(1 - y^2) * grad` with `y` the output.
pub fn tanh_op<'g>(graph: &'g Graph, a: impl Into<Operand<'g>>) -> Scalar<'g> {
    let a = graph.resolve(a.into());
    let value = graph.value_of(a).tanh();
    graph.push_op(value, Op::Tanh, vec![a])
}

impl<'g> Scalar<'g> {
    pub fn tanh(self) -> Scalar<'g> {
        tanh_op(self.graph(), self)
    }
}
