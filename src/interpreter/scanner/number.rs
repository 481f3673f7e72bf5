use crate::{
    error::ParseError,
    interpreter::{parser::ParseResult, scanner::cursor::Cursor},
    util::num::{fraction_to_f64, integer_to_f64},
};

/// Scans an optional minus sign.
///
/// Skips whitespace first. If the cursor is on `-`, it is consumed and `-1.0`
/// is returned; otherwise nothing is consumed and `1.0` is returned. A missing
/// sign means the number is positive, so this never fails.
///
/// # Example
/// ```
/// use duocalc::interpreter::scanner::{cursor::Cursor, number::scan_sign};
///
/// let mut cursor = Cursor::new(" -5");
/// assert_eq!(scan_sign(&mut cursor), -1.0);
/// assert_eq!(cursor.position(), 2);
///
/// let mut cursor = Cursor::new("5");
/// assert_eq!(scan_sign(&mut cursor), 1.0);
/// assert_eq!(cursor.position(), 0);
/// ```
pub fn scan_sign(cursor: &mut Cursor<'_>) -> f64 {
    cursor.skip_blanks();
    if cursor.eat('-') { -1.0 } else { 1.0 }
}

/// Scans a run of decimal digits into a non-negative integer.
///
/// Skips whitespace first, then consumes the longest run of consecutive ASCII
/// digits. The cursor is left just past the last digit.
///
/// # Errors
/// - `MissingDigits` if the cursor is at the end of the text or not on a
///   digit.
/// - `IntegerTooLarge` if the run does not fit into a `u128`.
pub fn scan_integer(cursor: &mut Cursor<'_>) -> ParseResult<u128> {
    let start = expect_digit(cursor)?;

    let mut value: u128 = 0;
    while let Some(digit) = cursor.peek().and_then(|c| c.to_digit(10)) {
        value = value.checked_mul(10)
                     .and_then(|v| v.checked_add(u128::from(digit)))
                     .ok_or(ParseError::IntegerTooLarge { position: start })?;
        cursor.bump();
    }

    Ok(value)
}

/// Scans the digits after a decimal comma into their fractional value.
///
/// Skips whitespace first, then consumes the longest run of ASCII digits. Once
/// the accumulator is full, further digits are consumed but ignored; they are
/// far below the precision of an `f64`.
///
/// # Errors
/// `MissingDigits` if the cursor is at the end of the text or not on a digit.
///
/// # Example
/// ```
/// use duocalc::interpreter::scanner::{cursor::Cursor, number::scan_fraction};
///
/// let mut cursor = Cursor::new("05x");
/// assert!((scan_fraction(&mut cursor).unwrap() - 0.05).abs() < 1e-12);
/// assert_eq!(cursor.position(), 2);
/// ```
pub fn scan_fraction(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    expect_digit(cursor)?;

    let mut value: u128 = 0;
    let mut digits = 0;
    let mut full = false;
    while let Some(digit) = cursor.peek().and_then(|c| c.to_digit(10)) {
        if !full {
            match value.checked_mul(10)
                       .and_then(|v| v.checked_add(u128::from(digit)))
            {
                Some(next) => {
                    value = next;
                    digits += 1;
                },
                None => full = true,
            }
        }
        cursor.bump();
    }

    Ok(fraction_to_f64(value, digits))
}

/// Skips whitespace and checks that a digit follows, returning its position.
fn expect_digit(cursor: &mut Cursor<'_>) -> ParseResult<usize> {
    cursor.skip_blanks();
    let position = cursor.position();

    match cursor.peek() {
        Some(c) if c.is_ascii_digit() => Ok(position),
        found => Err(ParseError::MissingDigits { position, found }),
    }
}

/// Scans a signed decimal number.
///
/// Grammar: `number := sign? integer ( ',' integer )?`
///
/// The integer part is read with [`scan_integer`]. If the character right after
/// it is `,` (no whitespace in between), the digits after the comma are read
/// with [`scan_fraction`]: their value divided by `10^n`, where `n` is the
/// number of digits, so `3,05` is `3.05`. The sign is applied last.
///
/// # Errors
/// - `MissingOperand` if only whitespace remains.
/// - `IntegerPartInvalid` wrapping the failure of the integer part.
/// - `FractionPartInvalid` wrapping the failure of the fractional part.
///
/// # Example
/// ```
/// use duocalc::interpreter::scanner::{cursor::Cursor, number::scan_number};
///
/// let mut cursor = Cursor::new(" -12,5 + 1");
/// let value = scan_number(&mut cursor).unwrap();
///
/// assert!((value + 12.5).abs() < 1e-12);
/// assert_eq!(cursor.position(), 6);
/// ```
pub fn scan_number(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    cursor.skip_blanks();
    if cursor.is_at_end() {
        return Err(ParseError::MissingOperand { position: cursor.position() });
    }

    let sign = scan_sign(cursor);
    let integer = scan_integer(cursor).map_err(ParseError::in_integer_part)?;
    let mut value = integer_to_f64(integer);

    if cursor.eat(',') {
        value += scan_fraction(cursor).map_err(ParseError::in_fraction_part)?;
    }

    Ok(sign * value)
}
