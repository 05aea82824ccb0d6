use super::*;
use crate::nn::Neuron;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_mlp_structure() -> Result<(), ScalarustError> {
    let graph = Graph::new();
    let mlp = Mlp::with_rng(
        &graph,
        3,
        &[4, 4, 1],
        &[Activation::Tanh, Activation::Tanh, Activation::Linear],
        &mut StdRng::seed_from_u64(7),
    )?;
    assert_eq!(mlp.layers().len(), 3);
    assert_eq!(mlp.n_inputs(), 3);
    assert_eq!(mlp.n_outputs(), 1);
    let widths: Vec<(usize, usize)> = mlp
        .layers()
        .iter()
        .map(|l| (l.n_inputs(), l.n_outputs()))
        .collect();
    assert_eq!(widths, vec![(3, 4), (4, 4), (4, 1)]);
    assert_eq!(mlp.num_parameters(), 4 * 4 + 4 * 5 + 5);
    Ok(())
}

#[test]
fn test_mlp_forward_single_output() -> Result<(), ScalarustError> {
    let graph = Graph::new();
    let mlp = Mlp::new(&graph, 2, &[3, 1], &[Activation::Relu, Activation::Gelu])?;
    let out = mlp.forward(&graph, &[0.5, -1.5])?;
    assert!(out.single().is_some());
    assert!(out.values()[0].is_finite());
    Ok(())
}

#[test]
fn test_mlp_forward_many_outputs() -> Result<(), ScalarustError> {
    let graph = Graph::new();
    let mlp = Mlp::new(&graph, 2, &[3, 2], &[Activation::Tanh, Activation::Tanh])?;
    let out = mlp.forward(&graph, &[0.5, -1.5])?;
    assert_eq!(out.len(), 2);
    assert!(out.single().is_none());
    Ok(())
}

#[test]
fn test_mlp_forward_matches_hand_computation() -> Result<(), ScalarustError> {
    let graph = Graph::new();
    let hidden = Layer::from_neurons(vec![
        Neuron::from_weights(&graph, &[1.0, -1.0], 0.0, Activation::Relu),
        Neuron::from_weights(&graph, &[0.5, 0.5], 1.0, Activation::Relu),
    ])?;
    let head = Layer::from_neurons(vec![Neuron::from_weights(
        &graph,
        &[2.0, -1.0],
        0.25,
        Activation::Linear,
    )])?;
    let mlp = Mlp::from_layers(vec![hidden, head])?;

    // hidden: relu(3 - 1) = 2, relu(1 + 1.5 + 0.5) = 3; head: 0.25 + 4 - 3
    let y = mlp
        .forward(&graph, &[3.0, 1.0])?
        .single()
        .ok_or(ScalarustError::EmptyLayer)?;
    assert_eq!(y.value(), 1.25);

    y.backward()?;
    let first = &mlp.layers()[0].neurons()[0];
    assert_eq!(first.weights()[0].grad(&graph)?, 2.0 * 3.0);
    assert_eq!(first.weights()[1].grad(&graph)?, 2.0 * 1.0);
    assert_eq!(first.bias().grad(&graph)?, 2.0);
    Ok(())
}

#[test]
fn test_mlp_config_errors() {
    let graph = Graph::new();
    assert_eq!(
        Mlp::new(&graph, 2, &[3, 1], &[Activation::Relu]).unwrap_err(),
        ScalarustError::LayerConfigMismatch {
            output_dims: 2,
            activations: 1
        }
    );
    assert_eq!(
        Mlp::new(&graph, 2, &[], &[]).unwrap_err(),
        ScalarustError::EmptyNetwork
    );
    assert_eq!(
        Mlp::new(&graph, 2, &[3, 0], &[Activation::Relu, Activation::Relu]).unwrap_err(),
        ScalarustError::EmptyLayer
    );
}

#[test]
fn test_from_layers_checks_widths() -> Result<(), ScalarustError> {
    let graph = Graph::new();
    let a = Layer::new(&graph, 2, 3, Activation::Tanh)?;
    let b = Layer::new(&graph, 4, 1, Activation::Tanh)?;
    assert_eq!(
        Mlp::from_layers(vec![a, b]).unwrap_err(),
        ScalarustError::ArityMismatch {
            expected: 3,
            actual: 4
        }
    );
    assert_eq!(
        Mlp::from_layers(Vec::new()).unwrap_err(),
        ScalarustError::EmptyNetwork
    );
    Ok(())
}

#[test]
fn test_mlp_input_arity() -> Result<(), ScalarustError> {
    let graph = Graph::new();
    let mlp = Mlp::new(&graph, 3, &[2], &[Activation::Linear])?;
    assert_eq!(
        mlp.forward(&graph, &[1.0]).unwrap_err(),
        ScalarustError::ArityMismatch {
            expected: 3,
            actual: 1
        }
    );
    Ok(())
}

#[test]
fn test_mlp_named_parameters() -> Result<(), ScalarustError> {
    let graph = Graph::new();
    let mlp = Mlp::new(&graph, 3, &[2, 1], &[Activation::Tanh, Activation::Linear])?;
    let named = mlp.named_parameters();
    assert_eq!(named.len(), mlp.num_parameters());
    assert_eq!(named[0].0, "layers.0.neurons.0.weight.0");
    assert!(named.iter().any(|(n, _)| n == "layers.1.neurons.0.weight.1"));
    assert_eq!(named[named.len() - 1].0, "layers.1.neurons.0.bias");
    Ok(())
}
