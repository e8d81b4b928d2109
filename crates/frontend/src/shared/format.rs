//! Money formatting helpers. Prices are whole rubles.

/// "1250" -> "1 250 ₽"
pub fn format_price(rubles: i64) -> String {
    format!("{} ₽", format_thousands(rubles))
}

pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Average values from the dashboard come as floats; render without
/// trailing ",00" when the value is whole.
pub fn format_price_f64(rubles: f64) -> String {
    let rounded = (rubles * 100.0).round() / 100.0;
    if (rounded - rounded.trunc()).abs() < f64::EPSILON {
        format_price(rounded as i64)
    } else {
        format!("{} ₽", format!("{:.2}", rounded).replace('.', ","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_separated_with_nbsp() {
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1250), "1\u{00a0}250");
        assert_eq!(format_thousands(1_000_000), "1\u{00a0}000\u{00a0}000");
        assert_eq!(format_thousands(-1500), "-1\u{00a0}500");
    }

    #[test]
    fn whole_averages_drop_the_fraction() {
        assert_eq!(format_price_f64(285.0), "285 ₽");
        assert_eq!(format_price_f64(287.5), "287,50 ₽");
    }
}
