//! Expression trees
//!
//! An [`Expr`] is either an already-resolved value, an application of an
//! operator to one or two operand sub-trees, or a symbolic variable
//! reference. Trees are produced by an external parser, consumed by exactly
//! one evaluation pass, and discarded; an application node exclusively owns
//! its operand sub-trees, and clones are deep enough that mutating a copy
//! never affects the original.

use crate::ops::OpRef;
use crate::value::Vector;
use crate::{Matrix, ReckonError, ReckonResult, Value};
use std::fmt;

/// A node in an expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An already-resolved value
    Value(Value),
    /// An unevaluated operator application
    Apply(Apply),
    /// A symbolic variable reference
    Variable(Variable),
}

impl Expr {
    /// Numeric view of this node
    ///
    /// An application node always fails here: partial evaluation is never
    /// silent, the walker has to resolve the node first.
    pub fn as_number(&self) -> ReckonResult<f64> {
        match self {
            Expr::Value(value) => value.as_number(),
            Expr::Variable(variable) => variable.resolve(),
            Expr::Apply(_) => Err(ReckonError::coercion("expression", "number")),
        }
    }

    /// Vector view of this node; only resolved values can supply one
    pub fn as_vector(&self) -> ReckonResult<Vector> {
        match self {
            Expr::Value(value) => value.as_vector(),
            Expr::Variable(variable) => {
                Err(ReckonError::coercion(variable.describe(), "vector"))
            }
            Expr::Apply(_) => Err(ReckonError::coercion("expression", "vector")),
        }
    }

    /// Matrix view of this node; only resolved values can supply one
    pub fn as_matrix(&self) -> ReckonResult<Matrix> {
        match self {
            Expr::Value(value) => value.as_matrix(),
            Expr::Variable(variable) => {
                Err(ReckonError::coercion(variable.describe(), "matrix"))
            }
            Expr::Apply(_) => Err(ReckonError::coercion("expression", "matrix")),
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Value(value)
    }
}

/// A symbolic variable reference
///
/// The scalar view resolves the name itself as a number: `"42"` resolves,
/// `"price"` does not. Name-to-value binding beyond that belongs to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve the name to a number; fails for non-numeric-looking names
    pub fn resolve(&self) -> ReckonResult<f64> {
        self.name
            .trim()
            .parse::<f64>()
            .map_err(|_| ReckonError::coercion(self.describe(), "number"))
    }

    fn describe(&self) -> String {
        format!("variable '{}'", self.name)
    }
}

/// An operator applied to one or two operand sub-trees, unevaluated
///
/// Operand count is validated against the operator's declared kind at
/// construction time, not at evaluation time.
#[derive(Debug, Clone)]
pub struct Apply {
    op: OpRef,
    operands: Vec<Expr>,
}

impl Apply {
    /// Pair an operator with its operands, validating arity eagerly
    pub fn new(op: OpRef, operands: Vec<Expr>) -> ReckonResult<Self> {
        if operands.len() != op.arity() {
            return Err(ReckonError::Arity {
                operator: op.name().to_string(),
                expected: op.arity(),
                actual: operands.len(),
            });
        }
        Ok(Self { op, operands })
    }

    /// Apply an operator to a single operand
    pub fn unary(op: OpRef, operand: Expr) -> ReckonResult<Self> {
        Self::new(op, vec![operand])
    }

    /// Apply an operator to two operands
    pub fn binary(op: OpRef, lhs: Expr, rhs: Expr) -> ReckonResult<Self> {
        Self::new(op, vec![lhs, rhs])
    }

    pub fn op(&self) -> &OpRef {
        &self.op
    }

    pub fn operands(&self) -> &[Expr] {
        &self.operands
    }
}

/// Structural equality: same operator kind (by canonical name, not instance)
/// and recursively equal operand trees
impl PartialEq for Apply {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.operands == other.operands
    }
}

/// Render an operand, substituting a short form for matrix values
fn operand_display(expr: &Expr) -> String {
    match expr {
        Expr::Value(Value::Matrix(m)) => m.short_form(),
        other => other.to_string(),
    }
}

impl fmt::Display for Apply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operands.as_slice() {
            [operand] => write!(f, "{}({})", self.op.symbol(), operand_display(operand)),
            [lhs, rhs] => write!(
                f,
                "({} {} {})",
                operand_display(lhs),
                self.op.symbol(),
                operand_display(rhs)
            ),
            _ => unreachable!("arity is validated at construction"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Value(value) => write!(f, "{}", value),
            Expr::Apply(apply) => write!(f, "{}", apply),
            Expr::Variable(variable) => write!(f, "{}", variable.name),
        }
    }
}
