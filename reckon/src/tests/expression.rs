use crate::{
    evaluate, Apply, Catalog, EvalContext, Expr, Matrix, ReckonError, Value, Variable, Vector,
};

fn op(alias: &str) -> crate::OpRef {
    Catalog::new().lookup(alias).unwrap().clone()
}

#[test]
fn test_binary_operator_with_one_operand_fails_at_construction() {
    let result = Apply::new(op("+"), vec![Expr::Value(Value::Number(1.0))]);
    assert!(matches!(
        result,
        Err(ReckonError::Arity {
            expected: 2,
            actual: 1,
            ..
        })
    ));
}

#[test]
fn test_unary_operator_with_two_operands_fails_at_construction() {
    let result = Apply::new(
        op("sqrt"),
        vec![
            Expr::Value(Value::Number(1.0)),
            Expr::Value(Value::Number(2.0)),
        ],
    );
    assert!(matches!(result, Err(ReckonError::Arity { .. })));
}

#[test]
fn test_application_scalar_view_always_fails() {
    let apply = Apply::binary(
        op("+"),
        Expr::Value(Value::Number(2.0)),
        Expr::Value(Value::Number(3.0)),
    )
    .unwrap();
    let expr = Expr::Apply(apply);

    let err = expr.as_number().unwrap_err();
    assert_eq!(err.to_string(), "cannot convert expression to a number");
}

#[test]
fn test_variable_scalar_view_parses_numeric_names() {
    assert_eq!(Variable::new("42").resolve().unwrap(), 42.0);
    assert_eq!(Variable::new("-2.5").resolve().unwrap(), -2.5);

    let err = Variable::new("price").resolve().unwrap_err();
    assert_eq!(err.to_string(), "cannot convert variable 'price' to a number");
}

#[test]
fn test_evaluating_a_variable_yields_a_number() {
    let result = evaluate(&Expr::Variable(Variable::new("42")), &EvalContext::new()).unwrap();
    assert_eq!(result, Value::Number(42.0));
}

#[test]
fn test_binary_display() {
    let apply = Apply::binary(
        op("+"),
        Expr::Value(Value::Number(2.0)),
        Expr::Value(Value::Number(3.0)),
    )
    .unwrap();
    assert_eq!(apply.to_string(), "(2 + 3)");
}

#[test]
fn test_unary_display() {
    let apply = Apply::unary(op("sqrt"), Expr::Value(Value::Number(4.0))).unwrap();
    assert_eq!(apply.to_string(), "sqrt(4)");
}

#[test]
fn test_matrix_operands_display_in_short_form() {
    let m = Matrix::from_rows(vec![
        vec![Value::Number(1.0), Value::Number(2.0)],
        vec![Value::Number(3.0), Value::Number(4.0)],
    ])
    .unwrap();
    let apply = Apply::binary(
        op("*"),
        Expr::Value(Value::Matrix(m)),
        Expr::Value(Value::Number(2.0)),
    )
    .unwrap();
    assert_eq!(apply.to_string(), "([2x2 matrix] * 2)");
}

#[test]
fn test_structural_equality_compares_operator_kind_not_instance() {
    // Two separately-built catalogs hand out distinct instances of the same
    // operator kind
    let lhs = Apply::binary(
        Catalog::new().lookup("+").unwrap().clone(),
        Expr::Value(Value::Number(1.0)),
        Expr::Value(Value::Number(2.0)),
    )
    .unwrap();
    let rhs = Apply::binary(
        Catalog::new().lookup("plus").unwrap().clone(),
        Expr::Value(Value::Number(1.0)),
        Expr::Value(Value::Number(2.0)),
    )
    .unwrap();
    assert_eq!(lhs, rhs);

    let different = Apply::binary(
        Catalog::new().lookup("-").unwrap().clone(),
        Expr::Value(Value::Number(1.0)),
        Expr::Value(Value::Number(2.0)),
    )
    .unwrap();
    assert_ne!(lhs, different);
}

#[test]
fn test_clones_are_deep() {
    let original = Expr::Value(Value::Vector(Vector::new(vec![
        Value::Number(1.0),
        Value::Number(2.0),
    ])));
    let copy = original.clone();
    assert_eq!(original, copy);

    // Evaluating the copy yields an independent value
    let value = evaluate(&copy, &EvalContext::new()).unwrap();
    drop(copy);
    assert_eq!(
        value,
        Value::Vector(Vector::new(vec![Value::Number(1.0), Value::Number(2.0)]))
    );
}

#[test]
fn test_nested_expression_display() {
    let inner = Apply::binary(
        op("+"),
        Expr::Value(Value::Number(1.0)),
        Expr::Value(Value::Number(2.0)),
    )
    .unwrap();
    let outer = Apply::unary(op("sqrt"), Expr::Apply(inner)).unwrap();
    assert_eq!(outer.to_string(), "sqrt((1 + 2))");
}
