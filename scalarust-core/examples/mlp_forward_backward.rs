use scalarust_core::{Activation, Graph, Mlp, Module, ScalarustError};

fn main() -> Result<(), ScalarustError> {
    env_logger::init();

    let graph = Graph::new();
    let mlp = Mlp::new(
        &graph,
        3,
        &[4, 4, 1],
        &[Activation::Tanh, Activation::Tanh, Activation::Linear],
    )?;
    println!("parameters: {}", mlp.num_parameters());

    let samples = [
        ([2.0, 3.0, -1.0], 1.0),
        ([3.0, -1.0, 0.5], -1.0),
        ([0.5, 1.0, 1.0], -1.0),
        ([1.0, 1.0, -1.0], 1.0),
    ];

    let mut loss = graph.scalar(0.0);
    for (inputs, target) in &samples {
        let out = mlp.forward(&graph, inputs)?;
        for prediction in out.into_vec() {
            println!("{:?} -> {:.4} (target {})", inputs, prediction.value(), target);
            loss = loss + (prediction - *target).pow(2.0);
        }
    }
    loss.backward()?;
    println!("loss = {:.4}", loss.value());

    for (name, param) in mlp.named_parameters().into_iter().take(5) {
        println!("{:<28} value {:>8.4}  grad {:>8.4}", name, param.value(&graph)?, param.grad(&graph)?);
    }
    println!("graph holds {} nodes", graph.len());
    Ok(())
}
