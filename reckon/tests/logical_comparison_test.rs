use reckon::{evaluate, Apply, Catalog, EvalContext, Expr, ReckonError, Value, Vector};

fn binary(catalog: &Catalog, alias: &str, lhs: Value, rhs: Value) -> Expr {
    let op = catalog.lookup(alias).unwrap().clone();
    Expr::Apply(Apply::binary(op, Expr::Value(lhs), Expr::Value(rhs)).unwrap())
}

fn eval(expr: &Expr) -> Value {
    evaluate(expr, &EvalContext::new()).unwrap()
}

#[test]
fn test_logical_connectives() {
    let catalog = Catalog::new();
    assert_eq!(
        eval(&binary(
            &catalog,
            "and",
            Value::Boolean(true),
            Value::Boolean(false)
        )),
        Value::Boolean(false)
    );
    assert_eq!(
        eval(&binary(
            &catalog,
            "or",
            Value::Boolean(true),
            Value::Boolean(false)
        )),
        Value::Boolean(true)
    );
    assert_eq!(
        eval(&binary(
            &catalog,
            "xor",
            Value::Boolean(true),
            Value::Boolean(true)
        )),
        Value::Boolean(false)
    );
}

#[test]
fn test_logical_operators_accept_numeric_truth_values() {
    let catalog = Catalog::new();
    // Non-zero numbers count as true
    assert_eq!(
        eval(&binary(
            &catalog,
            "and",
            Value::Number(1.0),
            Value::Number(2.0)
        )),
        Value::Boolean(true)
    );
    assert_eq!(
        eval(&binary(
            &catalog,
            "and",
            Value::Number(1.0),
            Value::Number(0.0)
        )),
        Value::Boolean(false)
    );
}

#[test]
fn test_not_negates() {
    let catalog = Catalog::new();
    let op = catalog.lookup("not").unwrap().clone();
    let expr = Expr::Apply(Apply::unary(op, Expr::Value(Value::Boolean(false))).unwrap());
    assert_eq!(eval(&expr), Value::Boolean(true));
}

#[test]
fn test_ordering_comparisons() {
    let catalog = Catalog::new();
    assert_eq!(
        eval(&binary(&catalog, "<", Value::Number(3.0), Value::Number(5.0))),
        Value::Boolean(true)
    );
    assert_eq!(
        eval(&binary(
            &catalog,
            "<=",
            Value::Number(5.0),
            Value::Number(3.0)
        )),
        Value::Boolean(false)
    );
    assert_eq!(
        eval(&binary(
            &catalog,
            ">=",
            Value::Number(5.0),
            Value::Number(5.0)
        )),
        Value::Boolean(true)
    );
}

#[test]
fn test_cross_kind_comparison_is_symmetric() {
    let catalog = Catalog::new();
    // rational 1/2 against float 0.75, both directions
    assert_eq!(
        eval(&binary(
            &catalog,
            "<",
            Value::rational(1, 2),
            Value::Number(0.75)
        )),
        Value::Boolean(true)
    );
    assert_eq!(
        eval(&binary(
            &catalog,
            ">",
            Value::Number(0.75),
            Value::rational(1, 2)
        )),
        Value::Boolean(true)
    );
}

#[test]
fn test_percentage_compares_through_numeric_view() {
    let catalog = Catalog::new();
    // 50% is 0.5
    assert_eq!(
        eval(&binary(
            &catalog,
            "<",
            Value::Percentage(50.0),
            Value::Number(0.6)
        )),
        Value::Boolean(true)
    );
}

#[test]
fn test_equality_works_across_aggregates() {
    let catalog = Catalog::new();
    let lhs = Value::Vector(Vector::new(vec![Value::Number(1.0), Value::Number(2.0)]));
    let rhs = Value::Vector(Vector::new(vec![Value::Number(1.0), Value::Number(2.0)]));
    assert_eq!(
        eval(&binary(&catalog, "==", lhs.clone(), rhs)),
        Value::Boolean(true)
    );

    let different = Value::Vector(Vector::new(vec![Value::Number(1.0), Value::Number(3.0)]));
    assert_eq!(
        eval(&binary(&catalog, "!=", lhs, different)),
        Value::Boolean(true)
    );
}

#[test]
fn test_equality_sees_through_element_kinds() {
    let catalog = Catalog::new();
    // 1/2 and 0.5 are equal through their numeric views
    let lhs = Value::Vector(Vector::new(vec![Value::rational(1, 2)]));
    let rhs = Value::Vector(Vector::new(vec![Value::Number(0.5)]));
    assert_eq!(
        eval(&binary(&catalog, "==", lhs, rhs)),
        Value::Boolean(true)
    );
}

#[test]
fn test_boolean_keeps_its_identity_in_equality() {
    let catalog = Catalog::new();
    assert_eq!(
        eval(&binary(
            &catalog,
            "==",
            Value::Boolean(true),
            Value::Boolean(true)
        )),
        Value::Boolean(true)
    );
    assert_eq!(
        eval(&binary(
            &catalog,
            "==",
            Value::Boolean(true),
            Value::Boolean(false)
        )),
        Value::Boolean(false)
    );
}

#[test]
fn test_aggregates_cannot_be_ordered() {
    let catalog = Catalog::new();
    let lhs = Value::Vector(Vector::new(vec![Value::Number(1.0)]));
    let rhs = Value::Vector(Vector::new(vec![Value::Number(2.0)]));
    let expr = binary(&catalog, "<", lhs, rhs);
    let err = evaluate(&expr, &EvalContext::new()).unwrap_err();
    assert!(matches!(err, ReckonError::Type(_)));
}
