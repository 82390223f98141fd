//! Resolved values and the coercion surface
//!
//! A [`Value`] is the closed union of every concrete kind an expression can
//! resolve to: floating-point numbers, exact rationals, percentages, booleans,
//! vectors and matrices. All cross-kind behavior lives here:
//!
//! - coercion views (`as_number` / `as_vector` / `as_matrix`) fail by default
//!   and are implemented only for the kinds that support them
//! - scalar type promotion is an exhaustive match in [`scalar`]
//! - shape broadcasting for aggregates lives in [`vector`] and [`matrix`]
//!
//! Operators never inspect operand kinds themselves; they call into this
//! module and let the promotion table decide the result kind.

pub mod compare;
pub mod matrix;
pub mod scalar;
pub mod vector;

use crate::{ReckonError, ReckonResult};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;
use serde::Serialize;
use std::fmt;

pub use compare::{compare, values_equal};
pub use matrix::Matrix;
pub use scalar::ArithmeticOp;
pub use vector::Vector;

/// A resolved value
///
/// Scalar kinds carry their magnitude directly; aggregate kinds store
/// [`Value`] elements, so vector and matrix entries may themselves be any
/// resolved kind, aggregates included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// General real number with IEEE floating-point semantics
    Number(f64),
    /// Exact rational; lossy only when mixed with `Number`
    Rational(BigRational),
    /// Raw percent magnitude (50 for 50%); the numeric view divides by 100
    Percentage(f64),
    /// Boolean; numeric view yields 0/1 but identity and rendering stay boolean
    Boolean(bool),
    /// Fixed-length ordered sequence of values
    Vector(Vector),
    /// Fixed row-by-column grid of values
    Matrix(Matrix),
}

impl Value {
    /// Build an exact rational from a numerator/denominator pair
    pub fn rational(numer: i64, denom: i64) -> Self {
        Value::Rational(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
    }

    /// Human-readable kind name for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Rational(_) => "rational",
            Value::Percentage(_) => "percentage",
            Value::Boolean(_) => "boolean",
            Value::Vector(_) => "vector",
            Value::Matrix(_) => "matrix",
        }
    }

    /// Descriptive string for error messages and debugging
    pub fn describe(&self) -> String {
        match self {
            Value::Number(n) => format!("number {}", n),
            Value::Rational(q) => format!("rational {}", q),
            Value::Percentage(p) => format!("percentage {}%", p),
            Value::Boolean(b) => format!("boolean {}", b),
            Value::Vector(v) => format!("vector of {} elements", v.len()),
            Value::Matrix(m) => format!("{}x{} matrix", m.rows(), m.cols()),
        }
    }

    /// Whether this value is one of the scalar kinds
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::Vector(_) | Value::Matrix(_))
    }

    /// Numeric view of this value
    ///
    /// Percentages divide by 100, booleans yield 0/1 and aggregates reduce by
    /// summing every element's numeric view.
    pub fn as_number(&self) -> ReckonResult<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            Value::Rational(q) => q.to_f64().ok_or_else(|| {
                ReckonError::Domain(format!("rational {} cannot be represented as a number", q))
            }),
            Value::Percentage(p) => Ok(p / 100.0),
            Value::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Vector(v) => v.sum(),
            Value::Matrix(m) => m.sum(),
        }
    }

    /// Vector view of this value
    ///
    /// A vector re-wraps its own elements; a matrix flattens row-major.
    /// Scalars do not coerce to vectors.
    pub fn as_vector(&self) -> ReckonResult<Vector> {
        match self {
            Value::Vector(v) => Ok(v.clone()),
            Value::Matrix(m) => Ok(Vector::new(m.elements().to_vec())),
            Value::Number(_) | Value::Rational(_) | Value::Percentage(_) | Value::Boolean(_) => {
                Err(ReckonError::coercion(self.describe(), "vector"))
            }
        }
    }

    /// Matrix view of this value
    ///
    /// A matrix re-wraps its own elements; a vector becomes a single-row
    /// matrix. Scalars do not coerce to matrices.
    pub fn as_matrix(&self) -> ReckonResult<Matrix> {
        match self {
            Value::Matrix(m) => Ok(m.clone()),
            Value::Vector(v) => Matrix::new(1, v.len(), v.elements().to_vec()),
            Value::Number(_) | Value::Rational(_) | Value::Percentage(_) | Value::Boolean(_) => {
                Err(ReckonError::coercion(self.describe(), "matrix"))
            }
        }
    }

    /// Boolean view of this value: the numeric view interpreted as a truth
    /// value (non-zero is true)
    pub fn as_boolean(&self) -> ReckonResult<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Ok(other.as_number()? != 0.0),
        }
    }

    /// Broadcast a pure scalar function across every numeric leaf reachable
    /// from this value, preserving shape
    ///
    /// Scalars apply the function to their numeric view and yield a `Number`;
    /// aggregates map every element, recursing through composite elements.
    pub fn apply_scalar_fn(&self, f: &dyn Fn(f64) -> f64) -> ReckonResult<Value> {
        match self {
            Value::Vector(v) => Ok(Value::Vector(v.apply_scalar_fn(f)?)),
            Value::Matrix(m) => Ok(Value::Matrix(m.apply_scalar_fn(f)?)),
            scalar => Ok(Value::Number(f(scalar.as_number()?))),
        }
    }

    /// Combine this value with a shape-compatible other value element-wise
    ///
    /// Aggregates coerce `other` to their own kind and reconcile shapes first
    /// (see [`vector`] and [`matrix`] for the broadcasting rules); scalars
    /// apply the function directly. Both operands are left untouched.
    pub fn apply_pairwise_fn(
        &self,
        other: &Value,
        f: &dyn Fn(&Value, &Value) -> ReckonResult<Value>,
    ) -> ReckonResult<Value> {
        match self {
            Value::Vector(v) => {
                let rhs = other.as_vector()?;
                Ok(Value::Vector(v.pairwise(&rhs, f)?))
            }
            Value::Matrix(m) => {
                let rhs = other.as_matrix()?;
                Ok(Value::Matrix(m.pairwise(&rhs, f)?))
            }
            scalar => f(scalar, other),
        }
    }

    /// Type-aware arithmetic between two values
    ///
    /// Scalar pairs go through the promotion table in [`scalar`]; a scalar
    /// against an aggregate broadcasts across the aggregate's elements; two
    /// aggregates combine element-wise after shape reconciliation.
    pub fn arithmetic(&self, op: ArithmeticOp, rhs: &Value) -> ReckonResult<Value> {
        match (self, rhs) {
            (Value::Vector(_) | Value::Matrix(_), Value::Vector(_) | Value::Matrix(_)) => {
                self.apply_pairwise_fn(rhs, &move |a, b| a.arithmetic(op, b))
            }
            (Value::Vector(v), r) => {
                Ok(Value::Vector(v.map_elements(&move |e| e.arithmetic(op, r))?))
            }
            (Value::Matrix(m), r) => {
                Ok(Value::Matrix(m.map_elements(&move |e| e.arithmetic(op, r))?))
            }
            (l, Value::Vector(v)) => {
                Ok(Value::Vector(v.map_elements(&move |e| l.arithmetic(op, e))?))
            }
            (l, Value::Matrix(m)) => {
                Ok(Value::Matrix(m.map_elements(&move |e| l.arithmetic(op, e))?))
            }
            (l, r) => scalar::arithmetic_operation(l, op, r),
        }
    }

    /// Addition following the promotion table
    pub fn add(&self, rhs: &Value) -> ReckonResult<Value> {
        self.arithmetic(ArithmeticOp::Add, rhs)
    }

    /// Subtraction following the promotion table
    pub fn subtract(&self, rhs: &Value) -> ReckonResult<Value> {
        self.arithmetic(ArithmeticOp::Subtract, rhs)
    }

    /// Multiplication following the promotion table
    pub fn multiply(&self, rhs: &Value) -> ReckonResult<Value> {
        self.arithmetic(ArithmeticOp::Multiply, rhs)
    }

    /// Division following the promotion table
    pub fn divide(&self, rhs: &Value) -> ReckonResult<Value> {
        self.arithmetic(ArithmeticOp::Divide, rhs)
    }

    /// Exponentiation following the promotion table
    pub fn power(&self, rhs: &Value) -> ReckonResult<Value> {
        self.arithmetic(ArithmeticOp::Power, rhs)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<BigRational> for Value {
    fn from(q: BigRational) -> Self {
        Value::Rational(q)
    }
}

impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Value::Vector(v)
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Value::Matrix(m)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Rational(q) => write!(f, "{}", q),
            Value::Percentage(p) => write!(f, "{}%", p),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Vector(v) => write!(f, "{}", v),
            Value::Matrix(m) => write!(f, "{}", m),
        }
    }
}
