//! Number formatting for money columns

/// Formats a number with a thousands separator and the given number of decimals.
///
/// Uses the Indonesian convention: `.` between thousands, `,` before decimals.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{},{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats a rupiah amount without decimals
///
/// ```rust,ignore
/// assert_eq!(format_rupiah(45000.0), "Rp 45.000");
/// ```
pub fn format_rupiah(value: f64) -> String {
    format!("Rp {}", format_number_with_decimals(value, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(45000.0), "Rp 45.000");
        assert_eq!(format_rupiah(1234567.0), "Rp 1.234.567");
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(-1500.0), "Rp -1.500");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1.235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1.234,6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
    }
}
