use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur while scanning the expression text:
/// empty input, missing or malformed numbers and missing or unsupported
/// operators. Composite failures wrap the failure that caused them.
pub mod parse_error;
/// Cause chain rendering.
///
/// Turns any error and the chain of its sources into a numbered, multi-line
/// report suitable for showing to a user.
pub mod report;
/// Runtime errors.
///
/// Contains the errors that can be raised while evaluating an already parsed
/// expression, which is division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use report::format_with_causes;
pub use runtime_error::RuntimeError;

/// Any failure on the way from expression text to result.
///
/// Both variants are transparent: `Display` and `source` are those of the
/// wrapped error, so the full cause chain stays visible.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The parsed expression could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
