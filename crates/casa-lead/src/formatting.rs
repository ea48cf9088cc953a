//! Brazilian display helpers for amounts and phone numbers.

const NBSP: char = '\u{a0}';

/// Format an amount as Brazilian reais, e.g. `R$ 1.234,56`.
pub fn format_brl(value: f64) -> String {
    if !value.is_finite() {
        return format!("R${NBSP}-");
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let fraction = cents % 100;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };

    format!("{sign}R${NBSP}{whole},{fraction:02}")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Render an 11-digit mobile number as `(dd) ddddd-dddd`.
///
/// Anything else is returned untouched so partial input survives.
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 11 {
        return raw.to_string();
    }

    format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..])
}

/// Interpret masked currency input as cents, so `"R$ 2.500,00"` becomes `2500.0`.
pub fn parse_currency_input(raw: &str) -> f64 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<f64>().map(|cents| cents / 100.0).unwrap_or(0.0)
}
