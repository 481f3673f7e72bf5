use thiserror::Error;

/// Represents all errors that can occur while scanning and parsing an
/// expression text.
///
/// Failures raised by a composite stage (an operand, a part of a number)
/// carry the failure of the stage below them as their `cause`, which is
/// reported as the error's [`std::error::Error::source`]. Leaf failures record
/// the cursor position at which the scan rule was violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The expression text is empty or consists of whitespace only.
    #[error("The expression is empty.")]
    EmptyInput,

    /// The number left of the operator could not be scanned.
    #[error("The left operand is invalid.")]
    LeftOperandInvalid {
        /// Why the number could not be scanned.
        #[source]
        cause: Box<ParseError>,
    },

    /// The number right of the operator could not be scanned.
    #[error("The right operand is invalid.")]
    RightOperandInvalid {
        /// Why the number could not be scanned.
        #[source]
        cause: Box<ParseError>,
    },

    /// The digits before the decimal comma could not be scanned.
    #[error("The integer part of the number is invalid.")]
    IntegerPartInvalid {
        /// Why the digits could not be scanned.
        #[source]
        cause: Box<ParseError>,
    },

    /// The digits after the decimal comma could not be scanned.
    #[error("The fractional part of the number is invalid.")]
    FractionPartInvalid {
        /// Why the digits could not be scanned.
        #[source]
        cause: Box<ParseError>,
    },

    /// A digit was expected but not found.
    #[error("Expected a digit at position {position}, {}.", describe_found(.found.as_ref()))]
    MissingDigits {
        /// Byte offset of the cursor.
        position: usize,
        /// The character found instead, or `None` at the end of the text.
        found:    Option<char>,
    },

    /// The end of the text was reached where a number should start.
    #[error("Expected a number at position {position}, but the expression ended.")]
    MissingOperand {
        /// Byte offset of the cursor.
        position: usize,
    },

    /// The end of the text was reached where the operator should be.
    #[error("Expected an operator at position {position}, but the expression ended.")]
    OperatorMissing {
        /// Byte offset of the cursor.
        position: usize,
    },

    /// A character was found where the operator should be, but it is not one
    /// of `+ - * /`.
    #[error("Invalid operator '{found}' at position {position}. Expected one of + - * /.")]
    OperatorInvalid {
        /// The offending character.
        found:    char,
        /// Byte offset of the character.
        position: usize,
    },

    /// A digit run does not fit into the integer accumulator.
    #[error("The digits starting at position {position} form a number that is too large.")]
    IntegerTooLarge {
        /// Byte offset of the first digit of the run.
        position: usize,
    },
}

impl ParseError {
    /// Wraps this error as the cause of a failed left operand.
    #[must_use]
    pub fn in_left_operand(self) -> Self {
        Self::LeftOperandInvalid { cause: Box::new(self) }
    }

    /// Wraps this error as the cause of a failed right operand.
    #[must_use]
    pub fn in_right_operand(self) -> Self {
        Self::RightOperandInvalid { cause: Box::new(self) }
    }

    /// Wraps this error as the cause of a failed integer part.
    #[must_use]
    pub fn in_integer_part(self) -> Self {
        Self::IntegerPartInvalid { cause: Box::new(self) }
    }

    /// Wraps this error as the cause of a failed fractional part.
    #[must_use]
    pub fn in_fraction_part(self) -> Self {
        Self::FractionPartInvalid { cause: Box::new(self) }
    }

    /// The directly wrapped error, if this is a composite failure.
    #[must_use]
    pub fn cause(&self) -> Option<&Self> {
        match self {
            Self::LeftOperandInvalid { cause }
            | Self::RightOperandInvalid { cause }
            | Self::IntegerPartInvalid { cause }
            | Self::FractionPartInvalid { cause } => Some(cause.as_ref()),
            _ => None,
        }
    }

    /// The innermost error of the chain; `self` for leaf failures.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }
}

fn describe_found(found: Option<&char>) -> String {
    match found {
        Some(c) => format!("found '{c}'"),
        None => "but the expression ended".to_string(),
    }
}
