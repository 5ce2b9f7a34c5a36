//! Human-friendly number rendering
//!
//! Prefers kitchen fractions (½, ⅓, ¾...) over decimals when the fractional
//! part is within 0.02 of one.

/// Fractions offered for display, smallest first
const DISPLAY_FRACTIONS: [(f64, &str); 9] = [
    (0.125, "⅛"),
    (0.25, "¼"),
    (1.0 / 3.0, "⅓"),
    (0.375, "⅜"),
    (0.5, "½"),
    (0.625, "⅝"),
    (2.0 / 3.0, "⅔"),
    (0.75, "¾"),
    (0.875, "⅞"),
];

const FRACTION_TOLERANCE: f64 = 0.02;

/// Fixed-point rendering with half-away-from-zero rounding
pub fn to_fixed(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    format!("{:.*}", digits, (value * scale).round() / scale)
}

/// One decimal place with a trailing ".0" removed
fn one_decimal(value: f64) -> String {
    let s = to_fixed(value, 1);
    match s.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => s,
    }
}

/// Render a quantity for display.
///
/// Negative and non-finite inputs render as "0"; tiny positive values as
/// "< 0.01". With `force_decimals` fractions are never used and up to two
/// decimals are kept.
pub fn format_number(num: f64, force_decimals: bool) -> String {
    if !num.is_finite() || num < 0.0 {
        return "0".to_string();
    }
    if num > 0.0 && num < 0.01 {
        return "< 0.01".to_string();
    }
    if num >= 10_000.0 {
        return format!("{}k", one_decimal(num / 1000.0));
    }
    if num >= 100.0 {
        return one_decimal(num);
    }

    let whole = num.floor();
    let frac = num - whole;

    if frac < 0.01 {
        return format!("{}", whole);
    }

    if force_decimals {
        let fixed = to_fixed(num, 2);
        return fixed.trim_end_matches('0').trim_end_matches('.').to_string();
    }

    if let Some((_, glyph)) = DISPLAY_FRACTIONS.iter()
        .find(|(value, _)| (frac - value).abs() < FRACTION_TOLERANCE)
    {
        return if whole > 0.0 {
            format!("{}{}", whole, glyph)
        } else {
            glyph.to_string()
        };
    }

    one_decimal(num)
}

/// Same rendering as [`format_number`], used for scaled amounts
pub fn format_scaled_number(num: f64) -> String {
    format_number(num, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers() {
        assert_eq!(format_number(0.0, false), "0");
        assert_eq!(format_number(2.0, false), "2");
        assert_eq!(format_number(3.004, false), "3");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number(0.5, false), "½");
        assert_eq!(format_number(1.5, false), "1½");
        assert_eq!(format_number(0.333, false), "⅓");
        assert_eq!(format_number(2.75, false), "2¾");
        assert_eq!(format_number(0.13, false), "⅛");
        assert_eq!(format_number(1.0 + 2.0 / 3.0, false), "1⅔");
    }

    #[test]
    fn test_no_close_fraction() {
        assert_eq!(format_number(2.1, false), "2.1");
        assert_eq!(format_number(14.787, false), "14.8");
        assert_eq!(format_number(0.45, false), "0.5");
    }

    #[test]
    fn test_large_values() {
        assert_eq!(format_number(453.592, false), "453.6");
        assert_eq!(format_number(240.0, false), "240");
        assert_eq!(format_number(100.04, false), "100");
        assert_eq!(format_number(12_500.0, false), "12.5k");
        assert_eq!(format_number(20_000.0, false), "20k");
    }

    #[test]
    fn test_edge_values() {
        assert_eq!(format_number(0.005, false), "< 0.01");
        assert_eq!(format_number(-3.0, false), "0");
        assert_eq!(format_number(f64::NAN, false), "0");
        assert_eq!(format_number(f64::INFINITY, false), "0");
    }

    #[test]
    fn test_force_decimals() {
        assert_eq!(format_number(1.5, true), "1.5");
        assert_eq!(format_number(0.333, true), "0.33");
        assert_eq!(format_number(2.125, true), "2.13");
        assert_eq!(format_number(2.0, true), "2");
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(2.25, 1), "2.3");
        assert_eq!(to_fixed(1.0, 2), "1.00");
    }

    #[test]
    fn test_format_scaled_number_matches() {
        for n in [0.25, 1.0, 7.5, 333.3] {
            assert_eq!(format_scaled_number(n), format_number(n, false));
        }
    }
}
