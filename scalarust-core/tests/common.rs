use scalarust_core::Graph;

// Shared by several test binaries; not every binary uses every helper.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Central finite difference of `f` at `x`, evaluated in a throwaway graph.
#[allow(dead_code)]
pub(crate) fn central_difference<F>(f: F, x: f64, epsilon: f64) -> f64
where
    F: for<'g> Fn(&'g Graph, f64) -> f64,
{
    let graph = Graph::new();
    let plus = f(&graph, x + epsilon);
    let minus = f(&graph, x - epsilon);
    (plus - minus) / (2.0 * epsilon)
}
