//! # Reckon Engine
//!
//! **The evaluation core of a symbolic/numeric expression engine**
//!
//! Reckon resolves expression trees to concrete values by dispatching
//! operators over a closed tower of numeric kinds — floating-point, exact
//! rational, percentage, boolean, vector and matrix — with rule-based type
//! promotion and shape broadcasting between them.
//!
//! ## Quick Start
//!
//! ```rust
//! use reckon::{evaluate, Apply, Catalog, EvalContext, Expr, ReckonResult, Value};
//!
//! fn main() -> ReckonResult<()> {
//!     let catalog = Catalog::new();
//!     let add = catalog.lookup("+").unwrap().clone();
//!
//!     // 2 + 3
//!     let expr = Expr::Apply(Apply::binary(
//!         add,
//!         Expr::Value(Value::Number(2.0)),
//!         Expr::Value(Value::Number(3.0)),
//!     )?);
//!
//!     let result = evaluate(&expr, &EvalContext::new())?;
//!     assert_eq!(result, Value::Number(5.0));
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Values
//! A [`Value`] is one of six concrete kinds. Scalar arithmetic between them
//! follows a fixed promotion table: rationals stay exact until they touch a
//! float, percentages scale what they are added to, and booleans count as
//! 0/1 inside arithmetic.
//!
//! ### Broadcasting
//! Vectors and matrices combine element-wise. Mismatched shapes reconcile
//! first: a scalar-shaped operand is repeated across the larger shape, any
//! other mismatch zero-pads the smaller side.
//!
//! ### Operators
//! Built-in operators are assembled into a [`Catalog`] keyed by alias for
//! the external parser. The ambient [`EvalContext`] (angle unit) is threaded
//! through every invocation, so a catalog is safe to share.

pub mod context;
pub mod error;
pub mod eval;
pub mod expr;
pub mod ops;
pub mod value;

pub use context::{AngleUnit, EvalContext};
pub use error::ReckonError;
pub use eval::evaluate;
pub use expr::{Apply, Expr, Variable};
pub use ops::{BinaryOperator, Catalog, OpRef, Operator, OperatorGroup, UnaryOperator};
pub use value::{compare, values_equal, ArithmeticOp, Matrix, Value, Vector};

/// Result type for reckon operations
pub type ReckonResult<T> = Result<T, ReckonError>;

#[cfg(test)]
mod tests;
