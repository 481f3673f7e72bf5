/// The evaluator module computes the result of a parsed expression.
///
/// It applies the parsed operator to the two operands and reports division by
/// zero as an error instead of producing a value.
pub mod evaluator;
/// The parser module turns an expression text into a `ParsedExpression`.
///
/// The parser drives the scanners over one shared cursor: left operand,
/// operator, right operand. Every scanner failure is wrapped with the stage
/// it occurred in before it is returned.
///
/// # Responsibilities
/// - Rejects empty and whitespace-only input.
/// - Reports which operand failed while keeping the underlying reason.
/// - Ignores whatever follows the right operand.
pub mod parser;
/// The scanner module reads the individual parts of an expression.
///
/// Scanners consume characters at the cursor according to one rule of the
/// grammar each: whitespace, sign, digit run, number and operator.
pub mod scanner;
