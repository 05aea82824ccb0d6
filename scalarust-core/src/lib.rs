//! # scalarust-core
//!
//! A reverse-mode automatic differentiation engine over scalar values, plus a
//! small feed-forward network (`Neuron`, `Layer`, `Mlp`) built on top of it.
//!
//! Every node lives in a [`Graph`] arena. Arithmetic and activation operations
//! eagerly compute their value and record a tagged [`Op`](autograd::Op) that
//! knows its local derivative. [`Scalar::backward`] sorts the ancestors of a
//! root topologically and accumulates `d root / d node` into every node.
//!
//! ```
//! use scalarust_core::Graph;
//!
//! let graph = Graph::new();
//! let x = graph.scalar(2.0);
//! let y = x.pow(3.0) + 1.0;
//! assert_eq!(y.value(), 9.0);
//!
//! y.backward().unwrap();
//! assert_eq!(x.grad(), 12.0);
//! ```

pub mod autograd;
pub mod error;
pub mod graph;
pub mod model;
pub mod nn;
pub mod node;
pub mod ops;
pub mod scalar;
pub mod utils;

pub use error::ScalarustError;
pub use graph::Graph;
pub use model::mlp::Mlp;
pub use nn::{Activation, Layer, LayerOutput, Module, Neuron, Parameter};
pub use node::NodeId;
pub use scalar::{Operand, Scalar};
