// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear scalar activations. Each one caches what its derivative needs:
//! `tanh` reuses its own output, `relu` its output sign and `gelu` the inner
//! tanh argument.

pub mod gelu;
pub mod relu;
pub mod tanh;

pub use gelu::gelu_op;
pub use relu::relu_op;
pub use tanh::tanh_op;
