//! Expression evaluation
//!
//! Single-threaded, synchronous recursive descent: operand sub-trees resolve
//! to values first, then the node's operator is invoked with the ambient
//! context. There is no cancellation at this layer; evaluation runs to
//! completion or fails synchronously. Recursion depth is bounded by tree
//! depth, so the caller must supply an acyclic tree.

use crate::expr::{Apply, Expr};
use crate::ops::OpRef;
use crate::{EvalContext, ReckonResult, Value};

/// Resolve an expression tree to a concrete value
pub fn evaluate(expr: &Expr, ctx: &EvalContext) -> ReckonResult<Value> {
    match expr {
        Expr::Value(value) => Ok(value.clone()),
        Expr::Variable(variable) => Ok(Value::Number(variable.resolve()?)),
        Expr::Apply(apply) => evaluate_apply(apply, ctx),
    }
}

fn evaluate_apply(apply: &Apply, ctx: &EvalContext) -> ReckonResult<Value> {
    match apply.op() {
        OpRef::Unary(op) => {
            let operand = evaluate(&apply.operands()[0], ctx)?;
            op.invoke(ctx, operand)
        }
        OpRef::Binary(op) => {
            let lhs = evaluate(&apply.operands()[0], ctx)?;
            let rhs = evaluate(&apply.operands()[1], ctx)?;
            op.invoke(ctx, lhs, rhs)
        }
    }
}
