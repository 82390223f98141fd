//! Value comparison
//!
//! Ordering and equality are free functions over the closed value union, so
//! symmetry holds by construction rather than by a reverse-dispatch
//! convention. Same-kind scalar pairs compare natively (exactly, for
//! rationals); cross-kind pairs compare through their numeric views as
//! floating-point. Aggregates support structural equality but not ordering.

use crate::{ReckonError, ReckonResult, Value};
use std::cmp::Ordering;

/// Compare two scalar values
///
/// Fails for aggregate operands and for unordered floating-point pairs (NaN).
pub fn compare(left: &Value, right: &Value) -> ReckonResult<Ordering> {
    match (left, right) {
        (Value::Rational(l), Value::Rational(r)) => Ok(l.cmp(r)),
        (Value::Boolean(l), Value::Boolean(r)) => Ok(l.cmp(r)),
        (l, r) if l.is_scalar() && r.is_scalar() => {
            let l = l.as_number()?;
            let r = r.as_number()?;
            l.partial_cmp(&r).ok_or_else(|| {
                ReckonError::Domain(format!("{} and {} cannot be ordered", l, r))
            })
        }
        (l, r) => Err(ReckonError::Type(format!(
            "cannot order {} and {}",
            l.describe(),
            r.describe()
        ))),
    }
}

/// Structural value equality
///
/// Works across every kind: booleans keep their own identity, rationals
/// compare exactly, cross-kind scalars compare through their numeric views,
/// and aggregates compare element-wise with recursion. An aggregate never
/// equals a scalar, and a vector never equals a matrix.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Boolean(l), Value::Boolean(r)) => l == r,
        (Value::Rational(l), Value::Rational(r)) => l == r,
        (Value::Vector(l), Value::Vector(r)) => {
            l.len() == r.len()
                && l.elements()
                    .iter()
                    .zip(r.elements())
                    .all(|(a, b)| values_equal(a, b))
        }
        (Value::Matrix(l), Value::Matrix(r)) => {
            l.rows() == r.rows()
                && l.cols() == r.cols()
                && l.elements()
                    .iter()
                    .zip(r.elements())
                    .all(|(a, b)| values_equal(a, b))
        }
        (l, r) if l.is_scalar() && r.is_scalar() => {
            match (l.as_number(), r.as_number()) {
                (Ok(a), Ok(b)) => a == b,
                _ => false,
            }
        }
        _ => false,
    }
}
