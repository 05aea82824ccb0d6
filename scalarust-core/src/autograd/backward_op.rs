use crate::error::ScalarustError;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_2_SQRT_PI};

/// `sqrt(2 / pi)`, the scale of the tanh approximation of GELU.
pub(crate) const SQRT_2_OVER_PI: f64 = FRAC_2_SQRT_PI * FRAC_1_SQRT_2;
/// Cubic coefficient of the tanh approximation of GELU.
pub(crate) const GELU_COEFF: f64 = 0.044715;

/// The operation that produced a node.
///
/// Each variant carries only what its local derivative needs beyond the
/// node's own value and its operands' values. Subtraction, negation and
/// division are built from `Add`, `Mul` and `Pow` and have no variant of their
/// own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Constant or parameter: nothing to propagate.
    Leaf,
    Add,
    Mul,
    /// `a ^ exponent`, exponent a constant.
    Pow { exponent: f64 },
    Tanh,
    Relu,
    /// GELU, tanh approximation. `inner` is the cached tanh argument
    /// `sqrt(2/pi) * (x + 0.044715 x^3)`.
    Gelu { inner: f64 },
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "leaf",
            Op::Add => "add",
            Op::Mul => "mul",
            Op::Pow { .. } => "pow",
            Op::Tanh => "tanh",
            Op::Relu => "relu",
            Op::Gelu { .. } => "gelu",
        }
    }

    /// Number of operands the operation consumes.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Mul => 2,
            Op::Pow { .. } | Op::Tanh | Op::Relu | Op::Gelu { .. } => 1,
        }
    }

    /// Applies the chain rule for this operation.
    ///
    /// Given `grad_output` (the node's accumulated `d root / d node`), the
    /// node's own forward value and the forward values of its operands,
    /// returns the contribution to add into each operand's grad. The returned
    /// vector is in the same order as `input_values`.
    ///
    /// # Errors
    /// `OperandCountMismatch` if `input_values` does not match [`Op::arity`].
    pub fn backward(
        &self,
        grad_output: f64,
        output_value: f64,
        input_values: &[f64],
    ) -> Result<Vec<f64>, ScalarustError> {
        if input_values.len() != self.arity() {
            return Err(ScalarustError::OperandCountMismatch {
                op: self.name(),
                expected: self.arity(),
                actual: input_values.len(),
            });
        }

        let grads = match *self {
            Op::Leaf => Vec::new(),
            Op::Add => vec![grad_output, grad_output],
            Op::Mul => {
                let (a, b) = (input_values[0], input_values[1]);
                vec![b * grad_output, a * grad_output]
            }
            Op::Pow { exponent } => {
                let a = input_values[0];
                vec![exponent * a.powf(exponent - 1.0) * grad_output]
            }
            Op::Tanh => vec![(1.0 - output_value * output_value) * grad_output],
            Op::Relu => {
                // Zero at exactly 0: the output is not strictly positive.
                let local = if output_value > 0.0 { 1.0 } else { 0.0 };
                vec![local * grad_output]
            }
            Op::Gelu { inner } => {
                let x = input_values[0];
                vec![gelu_derivative(x, inner) * grad_output]
            }
        };
        Ok(grads)
    }
}

/// Derivative of `0.5 x (1 + tanh(u))` with `u = c (x + k x^3)`:
///
/// `0.5 (1 + tanh u) + 0.5 x sech^2(u) c (1 + 3 k x^2)`
fn gelu_derivative(x: f64, inner: f64) -> f64 {
    let sech = 1.0 / inner.cosh();
    0.5 * (1.0 + inner.tanh())
        + 0.5 * x * sech * sech * SQRT_2_OVER_PI * (1.0 + 3.0 * GELU_COEFF * x * x)
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
