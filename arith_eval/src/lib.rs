//! Arithmetic expression evaluation
//!
//! This crate evaluates arithmetic expressions over decimal numbers with the
//! four binary operators and nested parentheses. Operator precedence is
//! resolved with an explicit operator stack per parenthesis level; the entry
//! point is [`evaluate`].

pub mod error;
pub mod evaluator;

// Re-export the main types for convenience
pub use error::EvalError;
pub use evaluator::{evaluate, BinaryOp};
