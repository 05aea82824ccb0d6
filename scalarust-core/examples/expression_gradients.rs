use scalarust_core::autograd::check_grad;
use scalarust_core::{Graph, ScalarustError};

fn main() -> Result<(), ScalarustError> {
    env_logger::init();

    let graph = Graph::new();
    let a = graph.scalar(-4.0);
    let b = graph.scalar(2.0);
    let c = a + b;
    let d = a * b + b.pow(3.0);
    let e = (c - d).relu() + (d * 2.0 + (b + a).relu());
    let f = e.pow(2.0);
    let g = f / 2.0 + 10.0 / f + c.tanh() + d.gelu();

    g.backward()?;
    println!("g        = {:.4}", g.value());
    println!("dg/da    = {:.4}", a.grad());
    println!("dg/db    = {:.4}", b.grad());
    println!("nodes    = {}", graph.len());

    match check_grad(
        |_, xs| {
            let (a, b) = (xs[0], xs[1]);
            let c = a + b;
            let d = a * b + b.pow(3.0);
            let e = (c - d).relu() + (d * 2.0 + (b + a).relu());
            let f = e.pow(2.0);
            f / 2.0 + 10.0 / f + c.tanh() + d.gelu()
        },
        &[-4.0, 2.0],
        1e-6,
        1e-4,
    ) {
        Ok(()) => println!("gradient check passed"),
        Err(err) => println!("gradient check failed: {}", err),
    }
    Ok(())
}
