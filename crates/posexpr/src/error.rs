//! Error types for coordinate expressions.

use thiserror::Error;

/// Errors that can occur while tokenizing or evaluating an expression.
///
/// Every variant is a distinct kind so callers can match on the failure
/// instead of inspecting the message text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExprError {
    /// Structurally malformed or empty expression.
    #[error("{0}")]
    Failed(String),

    /// A character outside the expression alphabet.
    #[error("Coordinate expression contains character '{0}' which is not allowed")]
    BadCharacter(char),

    /// Close paren with no open paren, or the reverse.
    #[error("{0}")]
    BadParens(String),

    /// An identifier that is neither a built-in variable nor a theme constant.
    #[error("Coordinate expression had unknown variable or constant \"{0}\"")]
    UnknownVariable(String),

    /// Division or modulo by zero.
    #[error("Coordinate expression results in division by zero")]
    DivideByZero,

    /// `%` applied to a floating-point operand.
    #[error("Coordinate expression tries to use mod operator on a floating-point number")]
    ModOnFloat,
}

impl ExprError {
    pub(crate) fn failed(message: impl Into<String>) -> Self {
        ExprError::Failed(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ExprError>;
