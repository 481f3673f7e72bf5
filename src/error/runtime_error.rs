use thiserror::Error;

use crate::util::num::format_decimal;

/// Represents all errors that can occur while evaluating a parsed expression.
///
/// Operator validity is settled by the parser, so the only way evaluation can
/// fail is an arithmetically undefined result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Division by zero: {} cannot be divided by 0.", format_decimal(*.dividend))]
    DivisionByZero {
        /// The left operand of the failed division.
        dividend: f64,
    },
}

