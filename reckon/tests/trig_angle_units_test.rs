use reckon::{evaluate, AngleUnit, Apply, Catalog, EvalContext, Expr, Value, Vector};
use std::f64::consts::PI;

fn trig(catalog: &Catalog, alias: &str, operand: Expr) -> Expr {
    let op = catalog.lookup(alias).unwrap().clone();
    Expr::Apply(Apply::unary(op, operand).unwrap())
}

fn assert_close(value: &Value, expected: f64) {
    let n = value.as_number().unwrap();
    assert!(
        (n - expected).abs() < 1e-12,
        "expected {} to be close to {}",
        n,
        expected
    );
}

#[test]
fn test_sin_converts_degrees() {
    let catalog = Catalog::new();
    let ctx = EvalContext::with_angle_unit(AngleUnit::Degrees);
    let result = evaluate(
        &trig(&catalog, "sin", Expr::Value(Value::Number(90.0))),
        &ctx,
    )
    .unwrap();
    assert_close(&result, 1.0);
}

#[test]
fn test_sin_converts_gradians() {
    let catalog = Catalog::new();
    let ctx = EvalContext::with_angle_unit(AngleUnit::Gradians);
    let result = evaluate(
        &trig(&catalog, "sin", Expr::Value(Value::Number(100.0))),
        &ctx,
    )
    .unwrap();
    assert_close(&result, 1.0);
}

#[test]
fn test_sin_passes_radians_through() {
    let catalog = Catalog::new();
    let ctx = EvalContext::new();
    let result = evaluate(
        &trig(&catalog, "sin", Expr::Value(Value::Number(PI / 2.0))),
        &ctx,
    )
    .unwrap();
    assert_close(&result, 1.0);
}

#[test]
fn test_cos_of_straight_angle() {
    let catalog = Catalog::new();
    let ctx = EvalContext::with_angle_unit(AngleUnit::Degrees);
    let result = evaluate(
        &trig(&catalog, "cos", Expr::Value(Value::Number(180.0))),
        &ctx,
    )
    .unwrap();
    assert_close(&result, -1.0);
}

#[test]
fn test_tan_of_forty_five_degrees() {
    let catalog = Catalog::new();
    let ctx = EvalContext::with_angle_unit(AngleUnit::Degrees);
    let result = evaluate(
        &trig(&catalog, "tan", Expr::Value(Value::Number(45.0))),
        &ctx,
    )
    .unwrap();
    assert_close(&result, 1.0);
}

#[test]
fn test_trig_broadcasts_across_vector_with_unit_conversion() {
    let catalog = Catalog::new();
    let ctx = EvalContext::with_angle_unit(AngleUnit::Degrees);
    let v = Expr::Value(Value::Vector(Vector::new(vec![
        Value::Number(0.0),
        Value::Number(90.0),
        Value::Number(180.0),
    ])));
    let result = evaluate(&trig(&catalog, "sin", v), &ctx).unwrap();

    let v = result.as_vector().unwrap();
    assert_close(v.get(0).unwrap(), 0.0);
    assert_close(v.get(1).unwrap(), 1.0);
    assert_close(v.get(2).unwrap(), 0.0);
}

#[test]
fn test_inverse_trig_returns_radians_regardless_of_unit() {
    let catalog = Catalog::new();
    let ctx = EvalContext::with_angle_unit(AngleUnit::Degrees);
    let result = evaluate(
        &trig(&catalog, "asin", Expr::Value(Value::Number(1.0))),
        &ctx,
    )
    .unwrap();
    assert_close(&result, PI / 2.0);
}

#[test]
fn test_angle_unit_conversion_factors() {
    assert_eq!(AngleUnit::Radians.to_radians(1.25), 1.25);
    assert!((AngleUnit::Degrees.to_radians(180.0) - PI).abs() < 1e-15);
    assert!((AngleUnit::Gradians.to_radians(200.0) - PI).abs() < 1e-15);
}
