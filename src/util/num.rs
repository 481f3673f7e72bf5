/// Converts an accumulated digit run into an `f64`.
///
/// Values above `2^53` are rounded to the nearest representable `f64`, which
/// is the same precision any decimal literal of that size would get.
///
/// ## Example
/// ```
/// use duocalc::util::num::integer_to_f64;
///
/// assert_eq!(integer_to_f64(42), 42.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn integer_to_f64(value: u128) -> f64 {
    value as f64
}

/// Converts the digits after the decimal comma into their fractional value.
///
/// `value` is the digit run read as an integer and `digits` is how many digit
/// characters went into `value`, so leading zeros are kept: `value = 5` with
/// `digits = 3` stands for `,005`. Digits dropped by the scanner after the
/// accumulator filled up are not counted.
///
/// ## Example
/// ```
/// use duocalc::util::num::fraction_to_f64;
///
/// assert!((fraction_to_f64(14, 2) - 0.14).abs() < 1e-12);
/// assert!((fraction_to_f64(5, 3) - 0.005).abs() < 1e-12);
/// assert_eq!(fraction_to_f64(0, 0), 0.0);
/// ```
#[must_use]
pub fn fraction_to_f64(value: u128, digits: usize) -> f64 {
    // Leading zeros count without filling the accumulator, so `digits` has no
    // fixed bound; beyond i32::MAX the result is 0.
    let exponent = i32::try_from(digits).unwrap_or(i32::MAX);
    integer_to_f64(value) / 10_f64.powi(exponent)
}

/// Renders a number with `,` as the decimal separator.
///
/// Integral values are printed without a fractional part. The output uses the
/// same notation the scanner accepts, so finite results can be fed back in.
///
/// ## Example
/// ```
/// use duocalc::util::num::format_decimal;
///
/// assert_eq!(format_decimal(3.25), "3,25");
/// assert_eq!(format_decimal(-10.0), "-10");
/// ```
#[must_use]
pub fn format_decimal(value: f64) -> String {
    value.to_string().replace('.', ",")
}
