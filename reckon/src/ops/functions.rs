//! Scalar-lifting unary operators
//!
//! A [`ScalarFnOp`] wraps a pure scalar function. A scalar argument gets the
//! function applied to its numeric view; an aggregate argument broadcasts
//! through [`Value::apply_scalar_fn`]. This lift is the sole mechanism by
//! which "apply f to a vector" means "apply f to every element" — individual
//! operators never re-implement the traversal.

use super::{Operator, UnaryOperator};
use crate::{EvalContext, ReckonResult, Value};

/// Apply a pure scalar function to a resolved value, broadcasting across
/// aggregates
pub(crate) fn lift(operand: &Value, f: &dyn Fn(f64) -> f64) -> ReckonResult<Value> {
    if operand.is_scalar() {
        Ok(Value::Number(f(operand.as_number()?)))
    } else {
        operand.apply_scalar_fn(f)
    }
}

/// A unary operator lifting a pure scalar function over any resolved value
pub struct ScalarFnOp {
    name: &'static str,
    aliases: &'static [&'static str],
    f: fn(f64) -> f64,
}

impl ScalarFnOp {
    pub fn new(name: &'static str, aliases: &'static [&'static str], f: fn(f64) -> f64) -> Self {
        Self { name, aliases, f }
    }

    pub fn sqrt() -> Self {
        Self::new("sqrt", &["sqrt"], f64::sqrt)
    }

    pub fn abs() -> Self {
        Self::new("abs", &["abs"], f64::abs)
    }

    pub fn floor() -> Self {
        Self::new("floor", &["floor"], f64::floor)
    }

    pub fn ceil() -> Self {
        Self::new("ceil", &["ceil", "ceiling"], f64::ceil)
    }

    pub fn round() -> Self {
        Self::new("round", &["round"], f64::round)
    }

    pub fn log() -> Self {
        Self::new("log", &["log", "ln"], f64::ln)
    }

    pub fn exp() -> Self {
        Self::new("exp", &["exp"], f64::exp)
    }

    pub fn negate() -> Self {
        Self::new("negate", &["negate", "neg"], |x| -x)
    }

    pub fn factorial() -> Self {
        Self::new("factorial", &["factorial", "fact"], factorial)
    }
}

impl Operator for ScalarFnOp {
    fn name(&self) -> &'static str {
        self.name
    }

    fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    fn precedence(&self) -> u8 {
        7
    }

    fn symbol(&self) -> &'static str {
        self.name
    }
}

impl UnaryOperator for ScalarFnOp {
    fn invoke(&self, _ctx: &EvalContext, operand: Value) -> ReckonResult<Value> {
        lift(&operand, &self.f)
    }
}

/// Factorial over the non-negative integers; anything else is NaN, which
/// propagates per floating-point semantics
fn factorial(x: f64) -> f64 {
    if !x.is_finite() || x < 0.0 || x.fract() != 0.0 {
        return f64::NAN;
    }
    let mut product = 1.0;
    let mut k = 2.0;
    while k <= x {
        product *= k;
        k += 1.0;
    }
    product
}
