use super::Scalar;
use crate::autograd::toposort::topological_sort;
use crate::error::ScalarustError;
use log::{debug, trace};

impl<'g> Scalar<'g> {
    /// Performs the backward pass with this node as the root.
    ///
    /// Orders every node reachable through the ancestor relation in
    /// post-order, seeds `self.grad = 1`, then runs each node's local
    /// derivative rule exactly once in reverse post-order, adding the
    /// contributions into its ancestors' grads. A node is therefore only
    /// processed after every path from the root has reached it.
    ///
    /// Gradients are accumulated, not reset: call [`Scalar::zero_grad`] or
    /// [`Module::zero_grad`](crate::nn::Module::zero_grad) first if an
    /// independent computation is wanted.
    ///
    /// # Errors
    /// `CycleDetected` if the ancestor relation is not acyclic, which the
    /// public operations cannot produce.
    pub fn backward(&self) -> Result<(), ScalarustError> {
        let order = topological_sort(&self.graph.nodes(), self.id)?;
        debug!(
            "backward: {} nodes reachable from root {:?}",
            order.len(),
            self.id
        );

        let mut nodes = self.graph.nodes_mut();
        nodes[self.id.0].grad = 1.0;

        for &id in order.iter().rev() {
            let node = &nodes[id.0];
            if node.is_leaf() {
                continue;
            }
            let input_values: Vec<f64> = node.ancestors.iter().map(|a| nodes[a.0].value).collect();
            let input_grads = node.op.backward(node.grad, node.value, &input_values)?;
            trace!(
                "backward: {:?} {} grad={} -> {:?}",
                id,
                node.op.name(),
                node.grad,
                input_grads
            );

            let ancestors = node.ancestors.clone();
            for (ancestor, grad) in ancestors.into_iter().zip(input_grads) {
                nodes[ancestor.0].grad += grad;
            }
        }
        debug!("backward: done");
        Ok(())
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.graph.nodes_mut()[self.id.0].grad = 0.0;
    }
}
