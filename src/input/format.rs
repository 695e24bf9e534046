//! Formatting of the held amount back into the editable field.

use crate::models::SalaryAmount;

/// The group separator used for ru-RU decimal formatting (no-break space).
pub const DEFAULT_GROUP_SEPARATOR: char = '\u{a0}';

/// Shortest digit run that gets grouped. ru-RU leaves four-digit numbers
/// such as "1000" ungrouped.
const MIN_GROUPED_DIGITS: usize = 5;

/// Formats `amount` for redisplay in the amount field.
///
/// Returns an empty string for zero, otherwise the digits grouped in threes
/// with a no-break space and no currency symbol.
///
/// # Examples
///
/// ```
/// use salary_engine::input::format_for_editing;
/// use salary_engine::models::SalaryAmount;
///
/// assert_eq!(format_for_editing(SalaryAmount::ZERO), "");
/// assert_eq!(format_for_editing(SalaryAmount::new(1000).unwrap()), "1000");
/// assert_eq!(
///     format_for_editing(SalaryAmount::new(1_234_567).unwrap()),
///     "1\u{a0}234\u{a0}567"
/// );
/// ```
pub fn format_for_editing(amount: SalaryAmount) -> String {
    format_for_editing_with(amount, DEFAULT_GROUP_SEPARATOR)
}

/// Same as [`format_for_editing`] with a caller-chosen group separator.
///
/// The separator must be whitespace for the formatted text to normalize
/// back to the same amount; [`crate::config::ConfigLoader`] enforces that.
pub fn format_for_editing_with(amount: SalaryAmount, separator: char) -> String {
    if amount.is_zero() {
        return String::new();
    }

    let digits = amount.value().to_string();
    if digits.len() < MIN_GROUPED_DIGITS {
        return digits;
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len_utf8());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
