use crate::{
    ast::{BinaryOperator, ParsedExpression},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// Evaluation returns either a value of type `T` or a `RuntimeError`
/// describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Computes the result of a parsed expression.
///
/// A pure function of the operands and the operator. Division checks its
/// right operand for exact equality with zero; there is no tolerance, so a
/// tiny but non-zero divisor is divided by as usual.
///
/// # Errors
/// `DivisionByZero` if the operator is `/` and the right operand is `0`
/// (either sign).
///
/// # Example
/// ```
/// use duocalc::{evaluate, parse};
///
/// let expr = parse("7 / 2").unwrap();
/// assert_eq!(evaluate(&expr).unwrap(), 3.5);
///
/// let expr = parse("7 / 0").unwrap();
/// assert!(evaluate(&expr).is_err());
/// ```
#[allow(clippy::float_cmp)]
pub fn evaluate(expr: &ParsedExpression) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let left = expr.left();
    let right = expr.right();

    match expr.operator() {
        Add => Ok(left + right),
        Sub => Ok(left - right),
        Mul => Ok(left * right),
        Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { dividend: left });
            }
            Ok(left / right)
        },
    }
}
