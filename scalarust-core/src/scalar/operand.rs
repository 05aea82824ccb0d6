use super::Scalar;

/// Either an existing node or a plain number.
///
/// Operations accept `impl Into<Operand>` on every side and resolve literals
/// into fresh constant leaves before building the result, so `3.0 + x` and
/// `x + 3.0` produce graphs of the same shape.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'g> {
    Node(Scalar<'g>),
    Literal(f64),
}

impl<'g> From<Scalar<'g>> for Operand<'g> {
    fn from(scalar: Scalar<'g>) -> Self {
        Operand::Node(scalar)
    }
}

impl<'g> From<&Scalar<'g>> for Operand<'g> {
    fn from(scalar: &Scalar<'g>) -> Self {
        Operand::Node(*scalar)
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Literal(value)
    }
}

impl From<i32> for Operand<'_> {
    fn from(value: i32) -> Self {
        Operand::Literal(f64::from(value))
    }
}
