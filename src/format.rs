use crate::config::CURRENCY_SYMBOL;

/// Formats an amount of đồng the way `vi-VN` does: no fraction digits, `.` between
/// thousands and a no-break space before the symbol (`150.000 ₫`).
pub fn format_vnd(amount: f64) -> String {
  let rounded = amount.round();
  let digits = format!("{:.0}", rounded.abs());
  let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
  for (index, digit) in digits.chars().enumerate() {
    if index > 0 && (digits.len() - index) % 3 == 0 {
      grouped.push('.');
    }
    grouped.push(digit);
  }
  // Negative amounts keep their sign even when they round to zero.
  let sign = if amount.is_sign_negative() && !amount.is_nan() { "-" } else { "" };
  format!("{sign}{grouped}\u{a0}{CURRENCY_SYMBOL}")
}
