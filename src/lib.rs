//! # duocalc
//!
//! duocalc evaluates simple two-operand arithmetic expressions such as
//! `-3,5 * 2`. Numbers use `,` as the decimal separator, the operator is one
//! of `+ - * /`, and every failure is reported together with the chain of
//! causes that led to it.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of a parsed expression.
///
/// This module declares the `BinaryOperator` enum and the `ParsedExpression`
/// struct produced by the parser and consumed by the evaluator.
///
/// # Responsibilities
/// - Restricts operators to the four supported arithmetic operations.
/// - Keeps the source text next to the scanned operands.
/// - Renders expressions back into the accepted notation.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// This module defines every error that can be raised while scanning,
/// parsing or evaluating an expression, and the formatter that renders an
/// error together with its causes.
///
/// # Responsibilities
/// - Defines error enums for parse and runtime failures.
/// - Chains composite failures to the failure that caused them.
/// - Records the cursor position of leaf failures.
pub mod error;
/// Orchestrates scanning, parsing and evaluation.
///
/// This module contains the cursor-based scanners, the parser that combines
/// them into a `ParsedExpression`, and the evaluator that computes its result.
pub mod interpreter;
/// General numeric helpers.
///
/// Converts scanned digit runs into `f64` values and formats `f64` values in
/// comma-decimal notation.
pub mod util;

pub use ast::{BinaryOperator, ParsedExpression};
pub use error::{CalcError, ParseError, RuntimeError, format_with_causes};
pub use interpreter::{evaluator::evaluate, parser::parse};

/// Parses and evaluates an expression in one step.
///
/// # Errors
/// Returns `CalcError::Parse` if the text is not a valid expression and
/// `CalcError::Runtime` if evaluating it fails.
///
/// # Examples
/// ```
/// use duocalc::{CalcError, calculate};
///
/// let result = calculate("3,14 + 0,01").unwrap();
/// assert!((result - 3.15).abs() < 1e-9);
///
/// assert!(matches!(calculate("5 / 0"), Err(CalcError::Runtime(_))));
/// assert!(matches!(calculate("5 & 2"), Err(CalcError::Parse(_))));
/// ```
pub fn calculate(text: &str) -> Result<f64, CalcError> {
    let expr = parse(text)?;
    Ok(evaluate(&expr)?)
}
