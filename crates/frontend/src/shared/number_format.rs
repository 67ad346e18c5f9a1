//! Number formatting for cards, charts and tables (en-US conventions)

/// Formats a number with `,` thousands separators and a fixed number of decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats a USD amount: `$1,234.56`, `-$12.00`
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_money;
/// assert_eq!(format_money(1234567.891), "$1,234,567.89");
/// ```
pub fn format_money(value: f64) -> String {
    let digits = format_number_with_decimals(value, 2);
    match digits.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", digits),
    }
}

/// Formats a count: `1,234`
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Formats a share with one decimal: `60.0%`
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number_with_decimals(value, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "$1,234.56");
        assert_eq!(format_money(1234567.89), "$1,234,567.89");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-1234.5), "-$1,234.50");
        assert_eq!(format_money(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1,234.567");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0.00");
        assert_eq!(format_number_with_decimals(f64::NAN, 1), "0.0");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1,234,567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1,234");
        assert_eq!(format_number_int(100.0), "100");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(60.0), "60.0%");
        assert_eq!(format_percent(100.0 / 3.0), "33.3%");
    }
}
