//! Operator framework
//!
//! An operator declares its canonical name, alias set, precedence and display
//! symbol, and computes a resolved value from one or two resolved values. The
//! ambient context is threaded through every invocation as an explicit
//! parameter, so operator instances are stateless and a shared catalog can
//! serve concurrent evaluations.
//!
//! Precedence is consumed by the external parser; inside this crate it is
//! only displayed.

pub mod arithmetic;
pub mod catalog;
pub mod functions;
pub mod logical;
pub mod trig;

use crate::{EvalContext, ReckonResult, Value};
use std::fmt;
use std::sync::Arc;

pub use catalog::{Catalog, OperatorGroup};

/// Capabilities shared by every operator
pub trait Operator {
    /// Canonical name; also the identity used by structural expression
    /// equality
    fn name(&self) -> &'static str;

    /// Names and symbols the external catalog binds to this operator
    fn aliases(&self) -> &'static [&'static str];

    /// Parser precedence; higher binds tighter
    fn precedence(&self) -> u8;

    /// Display symbol, e.g. `+` or `sin`
    fn symbol(&self) -> &'static str;
}

/// An operator producing a resolved value from one resolved value
pub trait UnaryOperator: Operator + Send + Sync {
    fn invoke(&self, ctx: &EvalContext, operand: Value) -> ReckonResult<Value>;
}

/// An operator producing a resolved value from two resolved values
pub trait BinaryOperator: Operator + Send + Sync {
    fn invoke(&self, ctx: &EvalContext, lhs: Value, rhs: Value) -> ReckonResult<Value>;
}

/// A shared handle to a built-in operator
///
/// Application nodes hold one of these; cloning shares the (immutable)
/// operator instance. Equality compares the operator's concrete kind by
/// canonical name, never instance identity.
#[derive(Clone)]
pub enum OpRef {
    Unary(Arc<dyn UnaryOperator>),
    Binary(Arc<dyn BinaryOperator>),
}

impl OpRef {
    /// Declared operand count
    pub fn arity(&self) -> usize {
        match self {
            OpRef::Unary(_) => 1,
            OpRef::Binary(_) => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OpRef::Unary(op) => op.name(),
            OpRef::Binary(op) => op.name(),
        }
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            OpRef::Unary(op) => op.aliases(),
            OpRef::Binary(op) => op.aliases(),
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            OpRef::Unary(op) => op.precedence(),
            OpRef::Binary(op) => op.precedence(),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            OpRef::Unary(op) => op.symbol(),
            OpRef::Binary(op) => op.symbol(),
        }
    }
}

impl fmt::Debug for OpRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpRef::Unary(op) => write!(f, "OpRef::Unary({})", op.name()),
            OpRef::Binary(op) => write!(f, "OpRef::Binary({})", op.name()),
        }
    }
}

impl PartialEq for OpRef {
    fn eq(&self, other: &Self) -> bool {
        self.arity() == other.arity() && self.name() == other.name()
    }
}
