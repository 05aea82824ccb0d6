// scalarust-core/src/ops/arithmetic/mul.rs

use crate::autograd::Op;
use crate::graph::Graph;
use crate::scalar::{Operand, Scalar};

/// `a * b`.
///
/// Backward: `a` receives `b.value * grad`, `b` receives `a.value * grad`.
pub fn mul_op<'g>(
    graph: &'g Graph,
    a: impl Into<Operand<'g>>,
    b: impl Into<Operand<'g>>,
) -> Scalar<'g> {
    let a = graph.resolve(a.into());
    let b = graph.resolve(b.into());
    let value = graph.value_of(a) * graph.value_of(b);
    graph.push_op(value, Op::Mul, vec![a, b])
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
