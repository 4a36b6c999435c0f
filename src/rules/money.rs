//! Money formatting for log lines.

/// Format a whole-dollar amount as `$1,500` (negative: `-$50`).
///
/// ```
/// use monopoly_engine::rules::format_money;
///
/// assert_eq!(format_money(1500), "$1,500");
/// assert_eq!(format_money(-75), "-$75");
/// ```
#[must_use]
pub fn format_money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
