use std::error::Error;

/// Renders an error together with the chain of errors that caused it.
///
/// The first line is the error's own message. Every following line reports one
/// cause, numbered from the immediate cause (`1.`) down to the root cause. An
/// error without a source yields a single line.
///
/// The error is only borrowed; rendering it has no effect on it.
///
/// # Example
/// ```
/// use duocalc::{error::format_with_causes, parse};
///
/// let error = parse("abc + 2").unwrap_err();
/// let report = format_with_causes(&error);
///
/// assert_eq!(report.lines().count(), 3);
/// assert_eq!(report.lines().next(), Some("The left operand is invalid."));
/// ```
#[must_use]
pub fn format_with_causes(error: &(dyn Error + 'static)) -> String {
    let causes = std::iter::successors(error.source(), |&cause| cause.source())
                 .enumerate()
                 .map(|(i, cause)| format!("  {}. Caused by: {cause}", i + 1));

    std::iter::once(error.to_string()).chain(causes)
                                      .collect::<Vec<_>>()
                                      .join("\n")
}
