/// Placeholder rendered when a ratio has an empty denominator
pub const NO_DATA: &str = "no data";

/// Formats a currency amount as `$1,234.56`; negative amounts render
/// with the sign before the dollar sign (`-$1,234.56`, never `$-1,234.56`).
pub fn format_currency(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!(
        "{}${}.{:02}",
        sign,
        format_thousands(cents / 100),
        cents % 100
    )
}

/// Formats a percentage with two decimals and a trailing label,
/// e.g. `12.34% Shipped`
pub fn format_percent(value: f64, label: &str) -> String {
    format!("{:.2}% {}", value, label)
}

/// Formats a non-negative integer with comma thousands separators
fn format_thousands(n: i64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(42.5), "$42.50");
        assert_eq!(format_currency(1234.56), "$1,234.56");
        assert_eq!(format_currency(9876543.21), "$9,876,543.21");
    }

    #[test]
    fn test_format_currency_negative_sign_placement() {
        assert_eq!(format_currency(-1234.56), "-$1,234.56");
        assert_eq!(format_currency(-0.4), "-$0.40");
    }

    #[test]
    fn test_format_currency_rounds_to_cents() {
        assert_eq!(format_currency(2.005), "$2.01");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.345, "Shipped"), "12.35% Shipped");
        assert_eq!(format_percent(0.0, "Disputed"), "0.00% Disputed");
        assert_eq!(format_percent(100.0, "Processing"), "100.00% Processing");
    }
}
