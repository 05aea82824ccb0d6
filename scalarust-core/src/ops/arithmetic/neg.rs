// scalarust-core/src/ops/arithmetic/neg.rs

use crate::graph::Graph;
use crate::ops::arithmetic::mul_op;
use crate::scalar::{Operand, Scalar};

/// `-a`, recorded as `a * -1`.
pub fn neg_op<'g>(graph: &'g Graph, a: impl Into<Operand<'g>>) -> Scalar<'g> {
    mul_op(graph, a, -1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::Op;
    use crate::ScalarustError;

    #[test]
    fn test_neg_is_mul_by_minus_one() -> Result<(), ScalarustError> {
        let graph = Graph::new();
        let x = graph.scalar(4.0);
        let y = -x;
        assert_eq!(y.value(), -4.0);
        assert_eq!(y.op(), Op::Mul);
        assert_eq!(y.ancestors()[1].value(), -1.0);

        y.backward()?;
        assert_eq!(x.grad(), -1.0);
        Ok(())
    }

    #[test]
    fn test_neg_of_literal() {
        let graph = Graph::new();
        assert_eq!(neg_op(&graph, 2.5).value(), -2.5);
    }
}
