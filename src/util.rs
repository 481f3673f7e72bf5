/// Numeric conversion and formatting helpers.
///
/// This module turns the digit runs collected by the scanners into `f64`
/// values and renders `f64` values back into the comma-decimal notation the
/// expression grammar accepts.
pub mod num;
