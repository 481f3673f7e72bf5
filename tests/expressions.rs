use duocalc::{BinaryOperator, CalcError, RuntimeError, calculate, evaluate, parse};

const TOLERANCE: f64 = 1e-9;

fn assert_result(src: &str, expected: f64) {
    match calculate(src) {
        Ok(value) => assert!((value - expected).abs() < TOLERANCE,
                             "'{src}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_result("1 + 2", 3.0);
    assert_result("8 - 5", 3.0);
    assert_result("7 * 9", 63.0);
    assert_result("10 / 4", 2.5);
}

#[test]
fn every_operator_matches_native_arithmetic() {
    let operands = [("0", 0.0), ("7", 7.0), ("-2", -2.0), ("12,5", 12.5), ("-0,25", -0.25)];

    for (left_src, left) in operands {
        for (right_src, right) in operands {
            assert_result(&format!("{left_src} + {right_src}"), left + right);
            assert_result(&format!("{left_src} - {right_src}"), left - right);
            assert_result(&format!("{left_src} * {right_src}"), left * right);
            if right != 0.0 {
                assert_result(&format!("{left_src} / {right_src}"), left / right);
            }
        }
    }
}

#[test]
fn fractional_parts() {
    assert_result("3,14 + 0,01", 3.15);
    assert_result("0,5 * 0,5", 0.25);
    assert_result("1,05 + 0", 1.05);
    assert_result("2,000 + 0", 2.0);
}

#[test]
fn negative_numbers() {
    assert_result("-5 * -2", 10.0);
    assert_result("-5 - -2", -3.0);
    assert_result("5--3", 8.0);
    assert_result("-1,5 + 1", -0.5);
    assert_result("- 4 + 1", -3.0);
}

#[test]
fn whitespace_is_tolerated() {
    assert_result("  12   +   8 ", 20.0);
    assert_result("12+8", 20.0);
    assert_result("\t12\t+\n8", 20.0);
    assert_eq!(calculate("  12   +   8 ").unwrap(), calculate("12+8").unwrap());
}

#[test]
fn trailing_input_is_ignored() {
    assert_result("1 + 2 garbage", 3.0);
    assert_result("1 + 2 + 3", 3.0);
    assert_result("4 * 2,5,7", 10.0);
}

#[test]
fn minus_between_numbers_is_the_operator() {
    let expr = parse("5-3").unwrap();
    assert_eq!(expr.left(), 5.0);
    assert_eq!(expr.operator(), BinaryOperator::Sub);
    assert_eq!(expr.right(), 3.0);
}

#[test]
fn parsed_expression_keeps_source_text() {
    let expr = parse("  -3,5*2 and more").unwrap();
    assert_eq!(expr.source_text(), "  -3,5*2 and more");
    assert_eq!(expr.to_string(), "-3,5 * 2");
}

#[test]
fn normalized_form_parses_to_the_same_expression() {
    let expr = parse("  -3,5*2 ").unwrap();
    let again = parse(&expr.to_string()).unwrap();

    assert_eq!(again.left(), expr.left());
    assert_eq!(again.operator(), expr.operator());
    assert_eq!(again.right(), expr.right());
}

#[test]
fn division_by_zero_is_error() {
    let expr = parse("5 / 0").unwrap();
    assert_eq!(evaluate(&expr), Err(RuntimeError::DivisionByZero { dividend: 5.0 }));

    assert!(matches!(calculate("0,5 / 0,000"),
                     Err(CalcError::Runtime(RuntimeError::DivisionByZero { .. }))));
    assert!(matches!(calculate("1 / -0"),
                     Err(CalcError::Runtime(RuntimeError::DivisionByZero { .. }))));
}

#[test]
fn division_by_tiny_divisor_is_not_zero() {
    assert_result("1 / 0,0001", 10_000.0);
}

#[test]
fn zero_divisor_only_matters_for_division() {
    assert_result("5 + 0", 5.0);
    assert_result("5 - 0", 5.0);
    assert_result("5 * 0", 0.0);
    assert_result("0 / 5", 0.0);
}

#[test]
fn large_integers_are_accepted() {
    assert_result("9007199254740993 + 0", 9_007_199_254_740_992.0);
    assert!(calculate("340282366920938463463374607431768211455 * 1").is_ok());
}

#[test]
fn pasted_long_fractions_are_accepted() {
    assert_result("3,1415926535897932384626433832795028841971 + 0", std::f64::consts::PI);
    assert_result("1,000000000000000000000000000000000000000000001 * 2", 2.0);
}

#[test]
fn evaluate_works_on_constructed_expressions() {
    use duocalc::ParsedExpression;

    let expr = ParsedExpression::new("", 1.5, BinaryOperator::Mul, 4.0);
    assert_eq!(evaluate(&expr), Ok(6.0));
}
