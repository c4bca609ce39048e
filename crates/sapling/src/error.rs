//! Error types for Sapling execution
//!
//! Looking up an unbound variable is deliberately *not* an error: it
//! evaluates to `0`. The only failure an expression can raise is a
//! division by zero; `Interrupted` only occurs when the embedder asks
//! for it through [`EvalContext::interrupt`](crate::EvalContext::interrupt).

use thiserror::Error;

use crate::ast::Int;

/// Errors that abort an evaluation or an execution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The right-hand side of a division evaluated to zero.
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero {
        /// The left-hand operand of the failed division
        dividend: Int,
    },

    /// Execution was interrupted through the context's interrupt flag.
    #[error("execution interrupted")]
    Interrupted,
}

impl EvalError {
    /// Short, stable name of the error kind (for logs and CLI output).
    pub fn kind(&self) -> &'static str {
        match self {
            EvalError::DivisionByZero { .. } => "division-by-zero",
            EvalError::Interrupted => "interrupted",
        }
    }
}

/// Result type alias for Sapling operations
pub type Result<T> = std::result::Result<T, EvalError>;
