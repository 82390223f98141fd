//! Arithmetic binary operators
//!
//! These delegate straight to the value-level arithmetic entry point, so the
//! promotion table in [`crate::value::scalar`] is authoritative and no
//! operator carries promotion logic of its own. Aggregate operands broadcast
//! through the same entry point.

use super::{BinaryOperator, Operator};
use crate::value::ArithmeticOp;
use crate::{EvalContext, ReckonResult, Value};

/// A binary operator backed by one row of the scalar promotion table
pub struct ArithmeticOperator {
    op: ArithmeticOp,
    name: &'static str,
    aliases: &'static [&'static str],
    precedence: u8,
    symbol: &'static str,
}

impl ArithmeticOperator {
    pub fn add() -> Self {
        Self {
            op: ArithmeticOp::Add,
            name: "add",
            aliases: &["+", "add", "plus"],
            precedence: 4,
            symbol: "+",
        }
    }

    pub fn subtract() -> Self {
        Self {
            op: ArithmeticOp::Subtract,
            name: "subtract",
            aliases: &["-", "subtract", "minus"],
            precedence: 4,
            symbol: "-",
        }
    }

    pub fn multiply() -> Self {
        Self {
            op: ArithmeticOp::Multiply,
            name: "multiply",
            aliases: &["*", "multiply", "times"],
            precedence: 5,
            symbol: "*",
        }
    }

    pub fn divide() -> Self {
        Self {
            op: ArithmeticOp::Divide,
            name: "divide",
            aliases: &["/", "divide", "over"],
            precedence: 5,
            symbol: "/",
        }
    }

    pub fn power() -> Self {
        Self {
            op: ArithmeticOp::Power,
            name: "power",
            aliases: &["^", "**", "pow"],
            precedence: 6,
            symbol: "^",
        }
    }
}

impl Operator for ArithmeticOperator {
    fn name(&self) -> &'static str {
        self.name
    }

    fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    fn precedence(&self) -> u8 {
        self.precedence
    }

    fn symbol(&self) -> &'static str {
        self.symbol
    }
}

impl BinaryOperator for ArithmeticOperator {
    fn invoke(&self, _ctx: &EvalContext, lhs: Value, rhs: Value) -> ReckonResult<Value> {
        lhs.arithmetic(self.op, &rhs)
    }
}

/// `X percentof Y`: X percent of Y
///
/// The left operand supplies the percent magnitude (a percentage keeps its
/// own magnitude, any other scalar is read at face value), then the promotion
/// table's number-times-percentage rule does the scaling, so the result kind
/// follows the right operand.
pub struct PercentOf;

impl Operator for PercentOf {
    fn name(&self) -> &'static str {
        "percentof"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["percentof", "percent-of"]
    }

    fn precedence(&self) -> u8 {
        5
    }

    fn symbol(&self) -> &'static str {
        "percentof"
    }
}

impl BinaryOperator for PercentOf {
    fn invoke(&self, _ctx: &EvalContext, lhs: Value, rhs: Value) -> ReckonResult<Value> {
        let magnitude = match &lhs {
            Value::Percentage(p) => *p,
            other => other.as_number()?,
        };
        rhs.multiply(&Value::Percentage(magnitude))
    }
}
