//! Trigonometric operators
//!
//! A [`TrigOp`] is a scalar-lifting operator that first converts its input to
//! radians per the ambient context's angle unit. Inverse trigonometric
//! functions return radians regardless of the angle unit and are plain
//! scalar lifts; the catalog groups them here all the same.

use super::functions::{lift, ScalarFnOp};
use super::{Operator, UnaryOperator};
use crate::{EvalContext, ReckonResult, Value};

/// An angle-unit-aware unary trigonometric operator
pub struct TrigOp {
    name: &'static str,
    aliases: &'static [&'static str],
    f: fn(f64) -> f64,
}

impl TrigOp {
    pub fn sin() -> Self {
        Self {
            name: "sin",
            aliases: &["sin", "sine"],
            f: f64::sin,
        }
    }

    pub fn cos() -> Self {
        Self {
            name: "cos",
            aliases: &["cos", "cosine"],
            f: f64::cos,
        }
    }

    pub fn tan() -> Self {
        Self {
            name: "tan",
            aliases: &["tan", "tangent"],
            f: f64::tan,
        }
    }

    pub fn asin() -> ScalarFnOp {
        ScalarFnOp::new("asin", &["asin", "arcsin"], f64::asin)
    }

    pub fn acos() -> ScalarFnOp {
        ScalarFnOp::new("acos", &["acos", "arccos"], f64::acos)
    }

    pub fn atan() -> ScalarFnOp {
        ScalarFnOp::new("atan", &["atan", "arctan"], f64::atan)
    }
}

impl Operator for TrigOp {
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

impl UnaryOperator for TrigOp {
    fn invoke(&self, ctx: &EvalContext, operand: Value) -> ReckonResult<Value> {
        let f = self.f;
        let unit = ctx.angle_unit;
        lift(&operand, &move |x| f(unit.to_radians(x)))
    }
}
