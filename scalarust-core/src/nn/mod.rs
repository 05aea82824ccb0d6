// src/nn/mod.rs

//! Neural network building blocks on top of the scalar engine.
//!
//! Modules own only [`Parameter`] handles; the parameter nodes themselves live
//! in the caller's [`Graph`](crate::Graph). Every forward pass appends new
//! intermediate nodes to that graph.

pub mod activation;
pub mod init;
pub mod layers;
pub mod module;
pub mod parameter;

pub use activation::Activation;
pub use layers::{Layer, LayerOutput, Neuron};
pub use module::Module;
pub use parameter::Parameter;
