//! Display formatting for statistics

/// Format a percentage with no decimals and thousands separators
///
/// `43.46 -> "43%"`, `1234.4 -> "1,234%"`, `-2.6 -> "-3%"`. Negative
/// values keep their sign when they round to zero (`-0.4 -> "-0%"`).
pub fn format_percent(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let negative = value < 0.0;

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if negative {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push('%');
    grouped
}

/// Format an optional percentage, rendering `None` as "n/a"
pub fn format_optional_percent(value: Option<f64>) -> String {
    value.map(format_percent).unwrap_or_else(|| "n/a".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_whole_percent() {
        assert_eq!(format_percent(43.46), "43%");
        assert_eq!(format_percent(43.7), "44%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_percent(-2.6), "-3%");
        assert_eq!(format_percent(-10.4), "-10%");
        // rounds to zero, sign kept
        assert_eq!(format_percent(-0.4), "-0%");
        assert_eq!(format_percent(-0.0), "0%");
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(format_percent(1234.4), "1,234%");
        assert_eq!(format_percent(-1234567.0), "-1,234,567%");
        assert_eq!(format_percent(999.0), "999%");
    }

    #[test]
    fn test_optional() {
        assert_eq!(format_optional_percent(Some(9.1)), "9%");
        assert_eq!(format_optional_percent(None), "n/a");
    }
}
