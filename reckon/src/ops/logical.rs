//! Logical and comparison operators
//!
//! Logical operators require both operands coercible to a scalar view
//! interpreted as a truth value (non-zero is true) and produce a boolean.
//! Ordering comparisons go through the free comparison function; equality and
//! inequality use structural value equality instead, so they also work across
//! aggregates.

use super::{BinaryOperator, Operator, UnaryOperator};
use crate::value::{compare, values_equal};
use crate::{EvalContext, ReckonError, ReckonResult, Value};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogicalKind {
    And,
    Or,
    Xor,
}

/// A binary logical connective over truth values
pub struct LogicalOperator {
    kind: LogicalKind,
    name: &'static str,
    aliases: &'static [&'static str],
}

impl LogicalOperator {
    pub fn and() -> Self {
        Self {
            kind: LogicalKind::And,
            name: "and",
            aliases: &["and", "&&"],
        }
    }

    pub fn or() -> Self {
        Self {
            kind: LogicalKind::Or,
            name: "or",
            aliases: &["or", "||"],
        }
    }

    pub fn xor() -> Self {
        Self {
            kind: LogicalKind::Xor,
            name: "xor",
            aliases: &["xor"],
        }
    }

    fn truth_value(&self, operand: &Value) -> ReckonResult<bool> {
        operand.as_boolean().map_err(|_| {
            ReckonError::Type(format!(
                "'{}' must have two logical arguments",
                self.name
            ))
        })
    }
}

impl Operator for LogicalOperator {
    fn name(&self) -> &'static str {
        self.name
    }

    fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    fn precedence(&self) -> u8 {
        match self.kind {
            LogicalKind::And => 2,
            LogicalKind::Or | LogicalKind::Xor => 1,
        }
    }

    fn symbol(&self) -> &'static str {
        self.name
    }
}

impl BinaryOperator for LogicalOperator {
    fn invoke(&self, _ctx: &EvalContext, lhs: Value, rhs: Value) -> ReckonResult<Value> {
        let l = self.truth_value(&lhs)?;
        let r = self.truth_value(&rhs)?;
        let result = match self.kind {
            LogicalKind::And => l && r,
            LogicalKind::Or => l || r,
            LogicalKind::Xor => l != r,
        };
        Ok(Value::Boolean(result))
    }
}

/// Logical negation
pub struct NotOperator;

impl Operator for NotOperator {
    fn name(&self) -> &'static str {
        "not"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["not", "!"]
    }

    fn precedence(&self) -> u8 {
        3
    }

    fn symbol(&self) -> &'static str {
        "not"
    }
}

impl UnaryOperator for NotOperator {
    fn invoke(&self, _ctx: &EvalContext, operand: Value) -> ReckonResult<Value> {
        let truth = operand
            .as_boolean()
            .map_err(|_| ReckonError::Type("'not' must have a logical argument".to_string()))?;
        Ok(Value::Boolean(!truth))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComparisonKind {
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Equal,
    NotEqual,
}

/// A binary comparison producing a boolean
pub struct ComparisonOperator {
    kind: ComparisonKind,
    name: &'static str,
    aliases: &'static [&'static str],
    symbol: &'static str,
}

impl ComparisonOperator {
    pub fn less() -> Self {
        Self {
            kind: ComparisonKind::Less,
            name: "less",
            aliases: &["<"],
            symbol: "<",
        }
    }

    pub fn less_or_equal() -> Self {
        Self {
            kind: ComparisonKind::LessOrEqual,
            name: "less_or_equal",
            aliases: &["<="],
            symbol: "<=",
        }
    }

    pub fn greater() -> Self {
        Self {
            kind: ComparisonKind::Greater,
            name: "greater",
            aliases: &[">"],
            symbol: ">",
        }
    }

    pub fn greater_or_equal() -> Self {
        Self {
            kind: ComparisonKind::GreaterOrEqual,
            name: "greater_or_equal",
            aliases: &[">="],
            symbol: ">=",
        }
    }

    pub fn equal() -> Self {
        Self {
            kind: ComparisonKind::Equal,
            name: "equal",
            aliases: &["==", "eq"],
            symbol: "==",
        }
    }

    pub fn not_equal() -> Self {
        Self {
            kind: ComparisonKind::NotEqual,
            name: "not_equal",
            aliases: &["!=", "<>", "neq"],
            symbol: "!=",
        }
    }
}

impl Operator for ComparisonOperator {
    fn name(&self) -> &'static str {
        self.name
    }

    fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    fn precedence(&self) -> u8 {
        3
    }

    fn symbol(&self) -> &'static str {
        self.symbol
    }
}

impl BinaryOperator for ComparisonOperator {
    fn invoke(&self, _ctx: &EvalContext, lhs: Value, rhs: Value) -> ReckonResult<Value> {
        let result = match self.kind {
            ComparisonKind::Equal => values_equal(&lhs, &rhs),
            ComparisonKind::NotEqual => !values_equal(&lhs, &rhs),
            ComparisonKind::Less => compare(&lhs, &rhs)? == Ordering::Less,
            ComparisonKind::LessOrEqual => compare(&lhs, &rhs)? != Ordering::Greater,
            ComparisonKind::Greater => compare(&lhs, &rhs)? == Ordering::Greater,
            ComparisonKind::GreaterOrEqual => compare(&lhs, &rhs)? != Ordering::Less,
        };
        Ok(Value::Boolean(result))
    }
}
