//! The built-in operator catalog
//!
//! Assembles the fixed set of built-in operators into named groups and backs
//! the alias-lookup table the external parser binds against. The catalog is
//! immutable once built and safe to share.

use super::arithmetic::{ArithmeticOperator, PercentOf};
use super::functions::ScalarFnOp;
use super::logical::{ComparisonOperator, LogicalOperator, NotOperator};
use super::trig::TrigOp;
use super::OpRef;
use std::collections::HashMap;
use std::sync::Arc;

/// A named group of built-in operators
pub struct OperatorGroup {
    pub name: &'static str,
    pub operators: Vec<OpRef>,
}

/// The fixed set of built-in operators, grouped and indexed by alias
pub struct Catalog {
    groups: Vec<OperatorGroup>,
    by_alias: HashMap<&'static str, OpRef>,
}

impl Catalog {
    /// Assemble the built-in operator set
    pub fn new() -> Self {
        let groups = vec![
            OperatorGroup {
                name: "arithmetic",
                operators: vec![
                    OpRef::Binary(Arc::new(ArithmeticOperator::add())),
                    OpRef::Binary(Arc::new(ArithmeticOperator::subtract())),
                    OpRef::Binary(Arc::new(ArithmeticOperator::multiply())),
                    OpRef::Binary(Arc::new(ArithmeticOperator::divide())),
                    OpRef::Binary(Arc::new(ArithmeticOperator::power())),
                    OpRef::Binary(Arc::new(PercentOf)),
                ],
            },
            OperatorGroup {
                name: "comparison",
                operators: vec![
                    OpRef::Binary(Arc::new(ComparisonOperator::less())),
                    OpRef::Binary(Arc::new(ComparisonOperator::less_or_equal())),
                    OpRef::Binary(Arc::new(ComparisonOperator::greater())),
                    OpRef::Binary(Arc::new(ComparisonOperator::greater_or_equal())),
                    OpRef::Binary(Arc::new(ComparisonOperator::equal())),
                    OpRef::Binary(Arc::new(ComparisonOperator::not_equal())),
                ],
            },
            OperatorGroup {
                name: "logical",
                operators: vec![
                    OpRef::Binary(Arc::new(LogicalOperator::and())),
                    OpRef::Binary(Arc::new(LogicalOperator::or())),
                    OpRef::Binary(Arc::new(LogicalOperator::xor())),
                    OpRef::Unary(Arc::new(NotOperator)),
                ],
            },
            OperatorGroup {
                name: "trigonometric",
                operators: vec![
                    OpRef::Unary(Arc::new(TrigOp::sin())),
                    OpRef::Unary(Arc::new(TrigOp::cos())),
                    OpRef::Unary(Arc::new(TrigOp::tan())),
                    OpRef::Unary(Arc::new(TrigOp::asin())),
                    OpRef::Unary(Arc::new(TrigOp::acos())),
                    OpRef::Unary(Arc::new(TrigOp::atan())),
                ],
            },
            OperatorGroup {
                name: "functions",
                operators: vec![
                    OpRef::Unary(Arc::new(ScalarFnOp::sqrt())),
                    OpRef::Unary(Arc::new(ScalarFnOp::abs())),
                    OpRef::Unary(Arc::new(ScalarFnOp::floor())),
                    OpRef::Unary(Arc::new(ScalarFnOp::ceil())),
                    OpRef::Unary(Arc::new(ScalarFnOp::round())),
                    OpRef::Unary(Arc::new(ScalarFnOp::log())),
                    OpRef::Unary(Arc::new(ScalarFnOp::exp())),
                    OpRef::Unary(Arc::new(ScalarFnOp::negate())),
                    OpRef::Unary(Arc::new(ScalarFnOp::factorial())),
                ],
            },
        ];

        let mut by_alias = HashMap::new();
        for group in &groups {
            for op in &group.operators {
                for alias in op.aliases() {
                    by_alias.insert(*alias, op.clone());
                }
            }
        }

        Self { groups, by_alias }
    }

    /// Look up an operator by any of its aliases
    pub fn lookup(&self, alias: &str) -> Option<&OpRef> {
        self.by_alias.get(alias)
    }

    /// The named operator groups, in registration order
    pub fn groups(&self) -> &[OperatorGroup] {
        &self.groups
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
