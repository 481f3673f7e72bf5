use crate::{
    ast::ParsedExpression,
    error::ParseError,
    interpreter::scanner::{cursor::Cursor, number::scan_number, operator::scan_operator},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses an expression text into its two operands and its operator.
///
/// This is the entry point for parsing. A single cursor walks the text from
/// left to right: left operand, operator, right operand. Whatever follows the
/// right operand is ignored, trailing whitespace included.
///
/// Grammar: `expr := ws? number ws? operator ws? number`
///
/// # Parameters
/// - `text`: The expression text, e.g. `"3,5 * -2"`.
///
/// # Returns
/// The parsed expression, which keeps a copy of `text`.
///
/// # Errors
/// - `EmptyInput` if `text` is empty or contains only whitespace.
/// - `LeftOperandInvalid` wrapping the reason the left number failed. The
///   operator and the right operand are not scanned in that case.
/// - `OperatorMissing` or `OperatorInvalid`, unwrapped.
/// - `RightOperandInvalid` wrapping the reason the right number failed.
///
/// # Example
/// ```
/// use duocalc::{ast::BinaryOperator, parse};
///
/// let expr = parse(" 3,5 * -2 ").unwrap();
///
/// assert_eq!(expr.left(), 3.5);
/// assert_eq!(expr.operator(), BinaryOperator::Mul);
/// assert_eq!(expr.right(), -2.0);
/// assert_eq!(expr.source_text(), " 3,5 * -2 ");
/// ```
pub fn parse(text: &str) -> ParseResult<ParsedExpression> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut cursor = Cursor::new(text);

    let left = scan_number(&mut cursor).map_err(ParseError::in_left_operand)?;
    let operator = scan_operator(&mut cursor)?;
    let right = scan_number(&mut cursor).map_err(ParseError::in_right_operand)?;

    Ok(ParsedExpression::new(text, left, operator, right))
}
