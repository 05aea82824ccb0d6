// scalarust-core/src/ops/arithmetic/sub.rs

use crate::graph::Graph;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::scalar::{Operand, Scalar};

/// `a - b`, recorded as `a + (-b)`.
///
/// A literal `b` is negated directly, so `x - 3.0` becomes `x + (-3.0)`
/// without an extra multiplication node.
pub fn sub_op<'g>(
    graph: &'g Graph,
    a: impl Into<Operand<'g>>,
    b: impl Into<Operand<'g>>,
) -> Scalar<'g> {
    match b.into() {
        Operand::Literal(value) => add_op(graph, a, -value),
        node => add_op(graph, a, neg_op(graph, node)),
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
