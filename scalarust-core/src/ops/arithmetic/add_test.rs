use super::*;
use crate::autograd::check_grad;
use crate::ScalarustError;

#[test]
fn test_add_forward() {
    let graph = Graph::new();
    let a = graph.scalar(2.0);
    let b = graph.scalar(-3.5);
    assert_eq!(add_op(&graph, a, b).value(), -1.5);
    assert_eq!((a + b).value(), -1.5);
}

#[test]
fn test_add_literal_both_sides() {
    let graph = Graph::new();
    let x = graph.scalar(1.0);

    let left = 3.0 + x;
    let right = x + 3.0;
    assert_eq!(left.value(), right.value());
    assert_eq!(left.op(), right.op());
    assert_eq!(left.ancestors().len(), 2);
    assert_eq!(right.ancestors().len(), 2);
    assert_eq!(left.ancestors()[1], x);
    assert_eq!(right.ancestors()[0], x);
    assert!(left.ancestors()[0].is_leaf());

    // Integer literals promote too.
    assert_eq!(add_op(&graph, x, 2).value(), 3.0);
}

#[test]
fn test_add_backward() -> Result<(), ScalarustError> {
    let graph = Graph::new();
    let a = graph.scalar(2.0);
    let b = graph.scalar(3.0);
    let c = a + b;
    c.backward()?;
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
    assert_eq!(c.grad(), 1.0);
    Ok(())
}

#[test]
fn test_add_same_node_twice() -> Result<(), ScalarustError> {
    let graph = Graph::new();
    let x = graph.scalar(5.0);
    let y = x + x;
    y.backward()?;
    assert_eq!(y.value(), 10.0);
    assert_eq!(x.grad(), 2.0);
    Ok(())
}

#[test]
fn test_add_grad_check() {
    check_grad(|_g, v| v[0] + v[1], &[0.7, -1.3], 1e-6, 1e-6).unwrap();
}
