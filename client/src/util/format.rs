//! Display formatting for prices and areas (`ru-RU` conventions).

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const GROUP_SEPARATOR: char = '\u{a0}';

/// Formats whole rubles as `25 000 000 ₽` (no-break spaces, no fraction).
pub fn format_rub(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2 + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out.push(GROUP_SEPARATOR);
    out.push('₽');
    out
}

/// Area in m² without a trailing `.0`; fractional areas keep one decimal
/// with a comma, e.g. `45`, `45,5`.
pub fn format_area(area: f64) -> String {
    let rounded = (area * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}").replace('.', ",")
    }
}
