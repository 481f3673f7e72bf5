/// Scan position over the expression text.
///
/// Provides the `Cursor` shared by all scanners, including whitespace
/// skipping.
pub mod cursor;

/// Number scanning.
///
/// Scans the optional sign, the integer part and the optional comma-separated
/// fractional part of an operand.
///
/// # Responsibilities
/// - Accepts `-` as the only sign.
/// - Accumulates digit runs without overflow, failing on runs that are too
///   large.
/// - Wraps digit failures with the part of the number they occurred in.
pub mod number;

/// Operator scanning.
///
/// Reads the single character between the operands and maps it to a
/// `BinaryOperator`.
pub mod operator;
