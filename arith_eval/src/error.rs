use thiserror::Error;

/// Errors produced while evaluating an arithmetic expression.
///
/// Both kinds are reported immediately on detection; evaluation never
/// returns a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The input was empty, contained unrecognized characters, had a
    /// malformed numeric literal, or was structurally unbalanced.
    #[error("invalid expression: {message}")]
    InvalidExpression {
        /// Description of what made the expression invalid
        message: String,
    },

    /// A division's right operand was exactly zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl EvalError {
    /// Creates an `InvalidExpression` error from anything convertible to a
    /// message string.
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        EvalError::InvalidExpression {
            message: message.into(),
        }
    }
}
