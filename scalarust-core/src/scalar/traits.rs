use super::Scalar;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

// Implements `Scalar op Scalar`, `Scalar op f64` and `f64 op Scalar` by
// delegating to the corresponding graph operation.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'g> $trait<Scalar<'g>> for Scalar<'g> {
            type Output = Scalar<'g>;

            fn $method(self, rhs: Scalar<'g>) -> Scalar<'g> {
                $op_fn(self.graph, self, rhs)
            }
        }

        impl<'g> $trait<f64> for Scalar<'g> {
            type Output = Scalar<'g>;

            fn $method(self, rhs: f64) -> Scalar<'g> {
                $op_fn(self.graph, self, rhs)
            }
        }

        impl<'g> $trait<Scalar<'g>> for f64 {
            type Output = Scalar<'g>;

            fn $method(self, rhs: Scalar<'g>) -> Scalar<'g> {
                $op_fn(rhs.graph, self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl<'g> Neg for Scalar<'g> {
    type Output = Scalar<'g>;

    fn neg(self) -> Scalar<'g> {
        neg_op(self.graph, self)
    }
}

/// Node identity: same graph, same index. Values are not compared.
impl PartialEq for Scalar<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl Eq for Scalar<'_> {}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl fmt::Debug for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.graph.nodes();
        let node = &nodes[self.id.0];
        f.debug_struct("Scalar")
            .field("id", &self.id.0)
            .field("value", &node.value)
            .field("grad", &node.grad)
            .field("op", &node.op)
            .finish()
    }
}
