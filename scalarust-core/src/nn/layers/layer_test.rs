use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_layer_shapes() -> Result<(), ScalarustError> {
    let graph = Graph::new();
    let layer = Layer::with_rng(&graph, 3, 4, Activation::Relu, &mut StdRng::seed_from_u64(1))?;
    assert_eq!(layer.n_inputs(), 3);
    assert_eq!(layer.n_outputs(), 4);
    assert_eq!(layer.activation(), Activation::Relu);
    assert_eq!(layer.num_parameters(), 4 * (3 + 1));

    let out = layer.forward(&graph, &[0.1, -0.2, 0.3])?;
    assert_eq!(out.len(), 4);
    assert!(out.single().is_none());
    Ok(())
}

#[test]
fn test_single_neuron_layer_unwraps() -> Result<(), ScalarustError> {
    let graph = Graph::new();
    let layer = Layer::from_neurons(vec![Neuron::from_weights(
        &graph,
        &[1.0, 2.0],
        0.5,
        Activation::Linear,
    )])?;
    let out = layer.forward(&graph, &[1.0, 1.0])?;
    match out {
        LayerOutput::Single(y) => assert_eq!(y.value(), 3.5),
        LayerOutput::Many(_) => panic!("expected a single output"),
    }
    Ok(())
}

#[test]
fn test_outputs_in_neuron_order() -> Result<(), ScalarustError> {
    let graph = Graph::new();
    let layer = Layer::from_neurons(vec![
        Neuron::from_weights(&graph, &[1.0], 0.0, Activation::Linear),
        Neuron::from_weights(&graph, &[-1.0], 0.0, Activation::Linear),
        Neuron::from_weights(&graph, &[2.0], 1.0, Activation::Linear),
    ])?;
    let out = layer.forward(&graph, &[3.0])?;
    assert_eq!(out.values(), vec![3.0, -3.0, 7.0]);
    Ok(())
}

#[test]
fn test_from_neurons_validation() {
    let graph = Graph::new();
    assert_eq!(
        Layer::from_neurons(Vec::new()).unwrap_err(),
        ScalarustError::EmptyLayer
    );
    assert_eq!(
        Layer::from_neurons(vec![
            Neuron::from_weights(&graph, &[1.0], 0.0, Activation::Tanh),
            Neuron::from_weights(&graph, &[1.0, 2.0], 0.0, Activation::Tanh),
        ])
        .unwrap_err(),
        ScalarustError::ArityMismatch {
            expected: 1,
            actual: 2
        }
    );
    assert_eq!(
        Layer::from_neurons(vec![
            Neuron::from_weights(&graph, &[1.0], 0.0, Activation::Tanh),
            Neuron::from_weights(&graph, &[1.0], 0.0, Activation::Relu),
        ])
        .unwrap_err(),
        ScalarustError::ActivationMismatch {
            expected: Activation::Tanh,
            actual: Activation::Relu
        }
    );
}

#[test]
fn test_empty_layer_rejected() {
    let graph = Graph::new();
    assert_eq!(
        Layer::new(&graph, 2, 0, Activation::Gelu).unwrap_err(),
        ScalarustError::EmptyLayer
    );
}

#[test]
fn test_layer_named_parameters() -> Result<(), ScalarustError> {
    let graph = Graph::new();
    let layer = Layer::new(&graph, 1, 2, Activation::Tanh)?;
    let names: Vec<String> = layer.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(
        names,
        vec![
            "neurons.0.weight.0",
            "neurons.0.bias",
            "neurons.1.weight.0",
            "neurons.1.bias"
        ]
    );
    Ok(())
}

#[test]
fn test_layer_backward_through_each_output() -> Result<(), ScalarustError> {
    use crate::utils::testing::{check_grads_near, check_value_near, param_grads};

    let graph = Graph::new();
    let layer = Layer::from_neurons(vec![
        Neuron::from_weights(&graph, &[2.0, 0.0], 0.0, Activation::Tanh),
        Neuron::from_weights(&graph, &[0.0, 3.0], 0.0, Activation::Tanh),
    ])?;
    let x = graph.scalar(0.5);
    let y = graph.scalar(-0.25);
    let outputs = layer.forward(&graph, &[x, y])?.into_vec();
    let total = outputs[0] + outputs[1];
    total.backward()?;

    let d0 = 1.0 - 1.0_f64.tanh().powi(2);
    let d1 = 1.0 - (-0.75_f64).tanh().powi(2);
    check_grads_near(&[x, y], &[2.0 * d0, 3.0 * d1], 1e-12);
    let grads = param_grads(&graph, &layer.neurons()[0].parameters());
    assert_eq!(grads.len(), 3);
    check_value_near(grads[0], 0.5 * d0, 1e-12);
    check_value_near(grads[2], d0, 1e-12);
    Ok(())
}
