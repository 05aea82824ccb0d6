use super::*;
use crate::ScalarustError;

#[test]
fn test_relu_forward() {
    let graph = Graph::new();
    let values: Vec<f64> = [-2.0, -1.0, 0.0, 1.0, 2.0]
        .iter()
        .map(|&v| graph.scalar(v).relu().value())
        .collect();
    assert_eq!(values, vec![0.0, 0.0, 0.0, 1.0, 2.0]);
    assert!(graph.scalar(f64::NAN).relu().value().is_nan());
}

#[test]
fn test_relu_backward_positive() -> Result<(), ScalarustError> {
    let graph = Graph::new();
    let x = graph.scalar(1.5);
    let y = x.relu() * 3.0;
    y.backward()?;
    assert_eq!(x.grad(), 3.0);
    Ok(())
}

#[test]
fn test_relu_backward_negative() -> Result<(), ScalarustError> {
    let graph = Graph::new();
    let x = graph.scalar(-1.5);
    let y = x.relu();
    y.backward()?;
    assert_eq!(y.value(), 0.0);
    assert_eq!(x.grad(), 0.0);
    Ok(())
}

#[test]
fn test_relu_boundary_at_zero() -> Result<(), ScalarustError> {
    let graph = Graph::new();
    let x = graph.scalar(0.0);
    let y = x.relu();
    y.backward()?;
    assert_eq!(y.value(), 0.0);
    assert_eq!(x.grad(), 0.0);
    Ok(())
}
