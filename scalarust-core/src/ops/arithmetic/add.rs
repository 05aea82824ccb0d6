// scalarust-core/src/ops/arithmetic/add.rs

use crate::autograd::Op;
use crate::graph::Graph;
use crate::scalar::{Operand, Scalar};

/// `a + b`.
///
/// Backward: both operands receive the result's grad unchanged.
pub fn add_op<'g>(
    graph: &'g Graph,
    a: impl Into<Operand<'g>>,
    b: impl Into<Operand<'g>>,
) -> Scalar<'g> {
    let a = graph.resolve(a.into());
    let b = graph.resolve(b.into());
    let value = graph.value_of(a) + graph.value_of(b);
    graph.push_op(value, Op::Add, vec![a, b])
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
