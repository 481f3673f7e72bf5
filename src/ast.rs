use crate::util::num::format_decimal;

/// Represents a binary operator.
///
/// Exactly the four arithmetic operators of the expression grammar. Once an
/// expression has been parsed, its operator is always one of these variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Maps an operator character to its variant.
    ///
    /// Returns `None` for every character outside `+ - * /`.
    ///
    /// # Example
    /// ```
    /// use duocalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol('*'), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_symbol('&'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The result of successfully parsing an expression text.
///
/// Holds the original text together with the two operands and the operator.
/// A `ParsedExpression` is immutable; the only way to obtain one from text is
/// [`crate::interpreter::parser::parse`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExpression {
    source_text: String,
    left:        f64,
    operator:    BinaryOperator,
    right:       f64,
}

impl ParsedExpression {
    /// Assembles an expression from already scanned parts.
    ///
    /// # Parameters
    /// - `source_text`: The text the parts were scanned from.
    /// - `left`: Left operand.
    /// - `operator`: The binary operator.
    /// - `right`: Right operand.
    #[must_use]
    pub fn new(source_text: impl Into<String>,
               left: f64,
               operator: BinaryOperator,
               right: f64)
               -> Self {
        Self { source_text: source_text.into(),
               left,
               operator,
               right }
    }

    /// The text this expression was parsed from, trailing input included.
    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    #[must_use]
    pub const fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub const fn operator(&self) -> BinaryOperator {
        self.operator
    }

    #[must_use]
    pub const fn right(&self) -> f64 {
        self.right
    }
}

/// Renders the normalized form `<left> <op> <right>`, using `,` as the
/// decimal separator so the output can be parsed again.
impl std::fmt::Display for ParsedExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "{} {} {}",
               format_decimal(self.left),
               self.operator,
               format_decimal(self.right))
    }
}
