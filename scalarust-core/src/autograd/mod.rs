//! # Autograd
//!
//! The reverse-mode machinery: the tagged operation kind stored in every node
//! together with its local derivative rule ([`Op`]), the post-order traversal
//! that orders a graph for the backward pass ([`toposort`]), and the
//! finite-difference checker used to validate derivative rules
//! ([`grad_check`]).

pub mod backward_op;
pub mod grad_check;
pub mod toposort;

pub use backward_op::Op;
pub use grad_check::{check_grad, numerical_grad, GradCheckError};
