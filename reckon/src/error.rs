//! Error types for the evaluation core
//!
//! Every violation is surfaced synchronously at the point of detection; there
//! is no batching or retry at this layer. Floating-point domain issues
//! (division by zero and friends) are not errors here: they propagate as
//! infinities or NaN per IEEE semantics. Only exact (rational) arithmetic can
//! raise a domain error.

use thiserror::Error;

/// Error types for the reckon evaluation core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReckonError {
    /// Wrong operand count for an operator's declared kind, detected when the
    /// application node is constructed
    #[error("operator '{operator}' expects {expected} operand(s), got {actual}")]
    Arity {
        operator: String,
        expected: usize,
        actual: usize,
    },

    /// A requested view is not implemented for this concrete node kind
    #[error("cannot convert {value} to a {target}")]
    Coercion {
        value: String,
        target: &'static str,
    },

    /// An operator's operand is not coercible to the shape it needs
    #[error("{0}")]
    Type(String),

    /// Exact arithmetic failure, e.g. rational division by zero
    #[error("{0}")]
    Domain(String),
}

impl ReckonError {
    /// Shorthand for a failed coercion view
    pub fn coercion(value: impl Into<String>, target: &'static str) -> Self {
        Self::Coercion {
            value: value.into(),
            target,
        }
    }
}
