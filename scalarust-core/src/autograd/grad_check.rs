use crate::error::ScalarustError;
use crate::graph::Graph;
use crate::scalar::Scalar;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarustError),
}

/// Builds `func` in a fresh graph at `point` and returns the root value.
fn evaluate<F>(func: &F, point: &[f64]) -> f64
where
    F: for<'g> Fn(&'g Graph, &[Scalar<'g>]) -> Scalar<'g>,
{
    let graph = Graph::new();
    let inputs: Vec<Scalar<'_>> = point.iter().map(|&v| graph.scalar(v)).collect();
    let value = func(&graph, &inputs).value();
    value
}

/// `(f(x + eps e_i), f(x - eps e_i))`
fn perturbed_losses<F>(func: &F, point: &[f64], index: usize, epsilon: f64) -> (f64, f64)
where
    F: for<'g> Fn(&'g Graph, &[Scalar<'g>]) -> Scalar<'g>,
{
    let mut perturbed = point.to_vec();
    perturbed[index] = point[index] + epsilon;
    let loss_plus = evaluate(func, &perturbed);
    perturbed[index] = point[index] - epsilon;
    let loss_minus = evaluate(func, &perturbed);
    (loss_plus, loss_minus)
}

/// Central finite-difference gradient of `func` at `point`.
///
/// `func` receives a fresh graph and one leaf per coordinate of `point` and
/// returns the root of the expression. Every evaluation uses its own graph.
pub fn numerical_grad<F>(func: F, point: &[f64], epsilon: f64) -> Vec<f64>
where
    F: for<'g> Fn(&'g Graph, &[Scalar<'g>]) -> Scalar<'g>,
{
    (0..point.len())
        .map(|i| {
            let (loss_plus, loss_minus) = perturbed_losses(&func, point, i, epsilon);
            (loss_plus - loss_minus) / (2.0 * epsilon)
        })
        .collect()
}

/// Checks the gradients produced by [`Scalar::backward`] against central
/// finite differences.
///
/// Runs `func` once in a fresh graph, calls `backward()` on its root, and
/// compares the grad of every input leaf with the numerical derivative. Two
/// values match if they are within `tolerance` absolutely or relatively.
pub fn check_grad<F>(
    func: F,
    point: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Scalar<'g>]) -> Scalar<'g>,
{
    let graph = Graph::new();
    let inputs: Vec<Scalar<'_>> = point.iter().map(|&v| graph.scalar(v)).collect();
    let output = func(&graph, &inputs);
    output
        .backward()
        .map_err(GradCheckError::BackwardPassError)?;
    debug!(
        "check_grad: root value {} over {} inputs ({} nodes)",
        output.value(),
        inputs.len(),
        graph.len()
    );

    for (input_index, input) in inputs.iter().enumerate() {
        let analytical_grad = input.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let (loss_plus, loss_minus) = perturbed_losses(&func, point, input_index, epsilon);
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
