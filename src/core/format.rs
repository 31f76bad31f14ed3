//! Result and display formatting.
//!
//! Both functions are pure. [`format_result`] is applied to evaluation
//! outputs only; [`display_text`] is the read-only projection of whatever
//! the entry currently holds.

use super::entry::parse_literal;

/// Fractional digits kept when a result is not an integer.
pub const RESULT_FRACTION_DIGITS: usize = 8;

/// Longest entry shown verbatim; longer entries switch to exponential form.
pub const DISPLAY_MAX_CHARS: usize = 12;

/// Fractional mantissa digits of the exponential form.
pub const EXPONENT_FRACTION_DIGITS: usize = 6;

/// Render an evaluation result.
///
/// Integers render without a fractional part. Other values are rounded to
/// eight fractional digits with trailing zeros (and a bare trailing point)
/// stripped, which hides binary noise such as `0.30000000000000004`.
///
/// # Example
///
/// ```rust
/// use abacus::core::format_result;
///
/// assert_eq!(format_result(0.1 + 0.2), "0.3");
/// assert_eq!(format_result(10.0 / 2.0), "5");
/// assert_eq!(format_result(1.0 / 3.0), "0.33333333");
/// ```
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value).to_string();
    }

    let text = if value.fract() == 0.0 {
        format!("{value}")
    } else {
        let fixed = format!("{value:.prec$}", prec = RESULT_FRACTION_DIGITS);
        fixed
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    };

    // -0 and values that round to it
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

/// Project an entry onto the display.
///
/// Entries up to [`DISPLAY_MAX_CHARS`] characters are shown verbatim;
/// longer ones are rendered in exponential notation with an explicitly
/// signed exponent. Entries that do not parse are shown verbatim.
///
/// # Example
///
/// ```rust
/// use abacus::core::display_text;
///
/// assert_eq!(display_text("123456789012"), "123456789012");
/// assert_eq!(display_text("1234567890123"), "1.234568e+12");
/// ```
pub fn display_text(entry: &str) -> String {
    if entry.chars().count() <= DISPLAY_MAX_CHARS {
        return entry.to_string();
    }
    match parse_literal(entry) {
        Some(value) => to_exponential(value),
        None => entry.to_string(),
    }
}

/// Exponential notation with a signed exponent, e.g. `4.2e-7` becomes
/// `4.200000e-7` and `1e12` becomes `1.000000e+12`.
pub fn to_exponential(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value).to_string();
    }
    let text = format!("{value:.prec$e}", prec = EXPONENT_FRACTION_DIGITS);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

fn non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(format_result(20.0), "20");
        assert_eq!(format_result(-3.0), "-3");
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(1e15), "1000000000000000");
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(-0.000000001), "0");
    }

    #[test]
    fn fractions_are_trimmed() {
        assert_eq!(format_result(0.25), "0.25");
        assert_eq!(format_result(0.1 + 0.2), "0.3");
        assert_eq!(format_result(2.5), "2.5");
        assert_eq!(format_result(-1.75), "-1.75");
    }

    #[test]
    fn fractions_keep_eight_digits() {
        assert_eq!(format_result(2.0 / 3.0), "0.66666667");
        assert_eq!(format_result(0.123456789), "0.12345679");
    }

    #[test]
    fn tiny_fractions_collapse_to_zero() {
        assert_eq!(format_result(0.000000001), "0");
    }

    #[test]
    fn non_finite_results_use_markers() {
        assert_eq!(format_result(f64::INFINITY), "Infinity");
        assert_eq!(format_result(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_result(f64::NAN), "NaN");
    }

    #[test]
    fn short_entries_display_verbatim() {
        assert_eq!(display_text("0"), "0");
        assert_eq!(display_text("3."), "3.");
        assert_eq!(display_text("-12.5"), "-12.5");
    }

    #[test]
    fn long_entries_display_exponential() {
        assert_eq!(display_text("1234567890123"), "1.234568e+12");
        assert_eq!(display_text("0.0000000012"), "0.0000000012");
        assert_eq!(display_text("0.000000000125"), "1.250000e-10");
        assert_eq!(display_text("1000000000000000"), "1.000000e+15");
    }

    #[test]
    fn long_entry_with_trailing_point_still_parses() {
        assert_eq!(display_text("123456789012."), "1.234568e+11");
    }

    #[test]
    fn exponential_of_small_magnitudes() {
        assert_eq!(to_exponential(1.5), "1.500000e+0");
        assert_eq!(to_exponential(0.5), "5.000000e-1");
    }
}
