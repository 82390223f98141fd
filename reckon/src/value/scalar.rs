//! Scalar arithmetic and the type promotion table
//!
//! The result kind of every binary scalar operation is fixed here, in one
//! exhaustive match over the (left kind, right kind) pair:
//!
//! - `Number` absorbs everything it touches (IEEE semantics, so division by
//!   zero yields an infinity rather than an error)
//! - `Rational`/`Rational` stays exact; exponentiation stays exact only for an
//!   integral exponent and falls back to `Number` otherwise
//! - `Number` with `Percentage` scales: `100 + 5%` is `105`, `100 * 5%` is `5`
//! - `Percentage` with `Percentage` stays a percentage, computed on the
//!   fractional values and rescaled, so `50% + 50%` is `100%`
//! - `Boolean` operands are taken at their numeric value (0/1) and follow the
//!   `Number` rules
//!
//! Operators delegate here and add no promotion logic of their own.

use crate::{ReckonError, ReckonResult, Value};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use serde::Serialize;
use std::fmt;

/// Binary scalar arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl ArithmeticOp {
    /// Human-readable name for the operation
    pub fn name(&self) -> &'static str {
        match self {
            ArithmeticOp::Add => "addition",
            ArithmeticOp::Subtract => "subtraction",
            ArithmeticOp::Multiply => "multiplication",
            ArithmeticOp::Divide => "division",
            ArithmeticOp::Power => "exponentiation",
        }
    }
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticOp::Add => write!(f, "+"),
            ArithmeticOp::Subtract => write!(f, "-"),
            ArithmeticOp::Multiply => write!(f, "*"),
            ArithmeticOp::Divide => write!(f, "/"),
            ArithmeticOp::Power => write!(f, "^"),
        }
    }
}

/// Perform type-aware scalar arithmetic
///
/// Both operands must be scalar kinds; [`Value::arithmetic`] routes aggregate
/// operands through the broadcasting machinery before they reach this table.
pub fn arithmetic_operation(left: &Value, op: ArithmeticOp, right: &Value) -> ReckonResult<Value> {
    // Booleans are floating-point-shaped inside arithmetic
    let left = boolean_as_number(left);
    let right = boolean_as_number(right);

    match (&left, &right) {
        (Value::Number(l), Value::Number(r)) => Ok(Value::Number(float_arithmetic(*l, op, *r))),

        // Mixing a rational with a float loses exactness
        (Value::Number(l), Value::Rational(r)) => {
            let r = rational_to_f64(r)?;
            Ok(Value::Number(float_arithmetic(*l, op, r)))
        }
        (Value::Rational(l), Value::Number(r)) => {
            let l = rational_to_f64(l)?;
            Ok(Value::Number(float_arithmetic(l, op, *r)))
        }

        (Value::Rational(l), Value::Rational(r)) => rational_arithmetic(l, op, r),

        // A percentage against a number scales for add/subtract and acts as
        // its fractional value elsewhere
        (Value::Number(n), Value::Percentage(p)) => {
            let fraction = p / 100.0;
            let result = match op {
                ArithmeticOp::Add => n * (1.0 + fraction),
                ArithmeticOp::Subtract => n * (1.0 - fraction),
                ArithmeticOp::Multiply => n * fraction,
                ArithmeticOp::Divide => n / fraction,
                ArithmeticOp::Power => n.powf(fraction),
            };
            Ok(Value::Number(result))
        }
        (Value::Percentage(p), Value::Number(n)) => {
            Ok(Value::Number(float_arithmetic(p / 100.0, op, *n)))
        }

        // Percentages promote to exact rationals next to one
        (Value::Rational(l), Value::Percentage(p)) => {
            let r = percent_fraction(*p)?;
            rational_arithmetic(l, op, &r)
        }
        (Value::Percentage(p), Value::Rational(r)) => {
            let l = percent_fraction(*p)?;
            rational_arithmetic(&l, op, r)
        }

        // Two percentages compose on their fractional values and stay a
        // percentage: 50% + 50% = 100%, 50% * 50% = 25%
        (Value::Percentage(l), Value::Percentage(r)) => {
            let result = float_arithmetic(l / 100.0, op, r / 100.0);
            Ok(Value::Percentage(result * 100.0))
        }

        (l, r) => Err(ReckonError::Type(format!(
            "{} is not defined for {} and {}",
            op.name(),
            l.describe(),
            r.describe()
        ))),
    }
}

/// Basic float arithmetic with IEEE semantics
fn float_arithmetic(left: f64, op: ArithmeticOp, right: f64) -> f64 {
    match op {
        ArithmeticOp::Add => left + right,
        ArithmeticOp::Subtract => left - right,
        ArithmeticOp::Multiply => left * right,
        ArithmeticOp::Divide => left / right,
        ArithmeticOp::Power => left.powf(right),
    }
}

/// Exact rational arithmetic
///
/// Division by an exact zero is a domain error; exponentiation stays exact
/// only when the exponent is integral.
fn rational_arithmetic(
    left: &BigRational,
    op: ArithmeticOp,
    right: &BigRational,
) -> ReckonResult<Value> {
    match op {
        ArithmeticOp::Add => Ok(Value::Rational(left + right)),
        ArithmeticOp::Subtract => Ok(Value::Rational(left - right)),
        ArithmeticOp::Multiply => Ok(Value::Rational(left * right)),
        ArithmeticOp::Divide => {
            if right.is_zero() {
                return Err(ReckonError::Domain("division by zero".to_string()));
            }
            Ok(Value::Rational(left / right))
        }
        ArithmeticOp::Power => rational_pow(left, right),
    }
}

/// Exponentiation of an exact rational
fn rational_pow(base: &BigRational, exponent: &BigRational) -> ReckonResult<Value> {
    if exponent.is_integer() {
        if let Some(k) = exponent.to_integer().to_i32() {
            if base.is_zero() && k < 0 {
                return Err(ReckonError::Domain(
                    "zero cannot be raised to a negative power".to_string(),
                ));
            }
            return Ok(Value::Rational(base.pow(k)));
        }
    }
    // Non-integral (or oversized) exponent: exactness is lost
    let base = rational_to_f64(base)?;
    let exponent = rational_to_f64(exponent)?;
    Ok(Value::Number(base.powf(exponent)))
}

/// The exact fractional value of a raw percent magnitude
fn percent_fraction(percent: f64) -> ReckonResult<BigRational> {
    let magnitude = BigRational::from_float(percent).ok_or_else(|| {
        ReckonError::Domain(format!("percentage {}% has no exact representation", percent))
    })?;
    Ok(magnitude / BigRational::from_integer(BigInt::from(100)))
}

fn rational_to_f64(q: &BigRational) -> ReckonResult<f64> {
    q.to_f64().ok_or_else(|| {
        ReckonError::Domain(format!("rational {} cannot be represented as a number", q))
    })
}

fn boolean_as_number(value: &Value) -> Value {
    match value {
        Value::Boolean(b) => Value::Number(if *b { 1.0 } else { 0.0 }),
        other => other.clone(),
    }
}
