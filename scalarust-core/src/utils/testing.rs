use crate::graph::Graph;
use crate::nn::Parameter;
use crate::scalar::Scalar;

/// Panics if `actual` and `expected` differ by more than `tolerance`.
pub fn check_value_near(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

/// Compares the gradients of `nodes` against `expected`, element by element.
pub fn check_grads_near(nodes: &[Scalar<'_>], expected: &[f64], tolerance: f64) {
    assert_eq!(nodes.len(), expected.len(), "Gradient count mismatch");
    for (i, (node, e)) in nodes.iter().zip(expected).enumerate() {
        let grad = node.grad();
        let diff = (grad - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, grad, e, diff, tolerance
            );
        }
    }
}

/// Reads the gradient of every parameter, in order.
/// Panics if a parameter is no longer part of `graph`.
pub fn param_grads(graph: &Graph, params: &[&Parameter]) -> Vec<f64> {
    params
        .iter()
        .map(|p| p.grad(graph).expect("parameter missing from graph"))
        .collect()
}
