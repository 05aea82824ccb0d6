// scalarust-core/src/ops/arithmetic/div.rs

use crate::graph::Graph;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::scalar::{Operand, Scalar};

/// `a / b`, recorded as `a * b^-1`.
///
/// A literal divisor is inverted directly (`x / 4.0` becomes `x * 0.25`).
/// Division by a zero node gives an infinite or NaN value and gradient rather
/// than an error.
pub fn div_op<'g>(
    graph: &'g Graph,
    a: impl Into<Operand<'g>>,
    b: impl Into<Operand<'g>>,
) -> Scalar<'g> {
    match b.into() {
        Operand::Literal(value) => mul_op(graph, a, value.powf(-1.0)),
        node => mul_op(graph, a, pow_op(graph, node, -1.0)),
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
