//! Amount input normalization.
//!
//! Turns the free-form text of the amount field into a [`SalaryAmount`].
//! Whitespace is a grouping artifact of the displayed value and is dropped
//! before validation.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::SalaryAmount;

/// Removes every whitespace character from `raw`.
///
/// This covers the no-break spaces produced by [`super::format_for_editing`].
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parses raw amount text.
///
/// After whitespace is stripped the text must be empty (amount zero) or
/// consist of ASCII digits only: no sign, no decimal point.
///
/// # Errors
///
/// Returns [`EngineError::ValidationRejected`] for any other content, or for
/// a digit string above [`SalaryAmount::MAX`].
///
/// # Examples
///
/// ```
/// use salary_engine::input::parse_amount_input;
///
/// assert_eq!(parse_amount_input("12 345").unwrap().value(), 12_345);
/// assert_eq!(parse_amount_input("").unwrap().value(), 0);
/// assert!(parse_amount_input("-5").is_err());
/// ```
pub fn parse_amount_input(raw: &str) -> EngineResult<SalaryAmount> {
    let stripped = strip_whitespace(raw);

    if stripped.is_empty() {
        return Ok(SalaryAmount::ZERO);
    }

    if !stripped.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::rejected(raw, "only digits are allowed"));
    }

    // More digits than fit in a u64 can only be out of range.
    let value: u64 = stripped.parse().map_err(|_| {
        EngineError::rejected(
            raw,
            format!("amount exceeds {} digits", SalaryAmount::MAX_DIGITS),
        )
    })?;

    SalaryAmount::new(value).map_err(|_| {
        EngineError::rejected(
            raw,
            format!("amount exceeds {} digits", SalaryAmount::MAX_DIGITS),
        )
    })
}

/// Normalizes raw amount text, keeping `current` when the text is rejected.
///
/// Rejection is silent: the caller only observes that the amount did not
/// change.
///
/// # Examples
///
/// ```
/// use salary_engine::input::normalize_amount_input;
/// use salary_engine::models::SalaryAmount;
///
/// let current = SalaryAmount::new(500).unwrap();
/// assert_eq!(normalize_amount_input("1 000", current).value(), 1_000);
/// assert_eq!(normalize_amount_input("12a", current), current);
/// ```
pub fn normalize_amount_input(raw: &str, current: SalaryAmount) -> SalaryAmount {
    match parse_amount_input(raw) {
        Ok(amount) => amount,
        Err(err) => {
            debug!(error = %err, current = current.value(), "Amount input ignored");
            current
        }
    }
}
