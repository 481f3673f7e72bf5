use crate::{
    ast::BinaryOperator,
    error::ParseError,
    interpreter::{parser::ParseResult, scanner::cursor::Cursor},
};

/// Scans the operator between the two operands.
///
/// Skips whitespace, then reads exactly one character, which must be one of
/// `+ - * /`. On success the cursor is left just past the operator.
///
/// # Errors
/// - `OperatorMissing` if the end of the text is reached.
/// - `OperatorInvalid` if the character is not a supported operator.
///
/// # Example
/// ```
/// use duocalc::{
///     ast::BinaryOperator,
///     interpreter::scanner::{cursor::Cursor, operator::scan_operator},
/// };
///
/// let mut cursor = Cursor::new("  / 4");
/// assert_eq!(scan_operator(&mut cursor).unwrap(), BinaryOperator::Div);
/// assert_eq!(cursor.position(), 3);
/// ```
pub fn scan_operator(cursor: &mut Cursor<'_>) -> ParseResult<BinaryOperator> {
    cursor.skip_blanks();
    let position = cursor.position();

    let symbol = cursor.bump()
                       .ok_or(ParseError::OperatorMissing { position })?;

    BinaryOperator::from_symbol(symbol).ok_or(ParseError::OperatorInvalid { found: symbol,
                                                                            position })
}
