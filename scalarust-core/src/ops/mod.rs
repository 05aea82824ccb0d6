// src/ops/mod.rs

//! Forward construction of every graph operation.
//!
//! Each `*_op` function resolves its operands (promoting literals to constant
//! leaves), computes the value eagerly and records the [`Op`](crate::autograd::Op)
//! whose rule the backward pass will apply.

pub mod activation;
pub mod arithmetic;

pub use activation::{gelu_op, relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
