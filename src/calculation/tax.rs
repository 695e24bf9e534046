//! NDFL (statutory income tax) calculation.
//!
//! The rate is a single fixed constant; it does not vary by salary mode,
//! by date or by whether the amount already includes tax.

use rust_decimal::Decimal;

use crate::models::{AuditStep, SalaryAmount};

/// The NDFL rate, in percent.
pub const NDFL_RATE_PERCENT: i64 = 13;

/// Returns the NDFL rate as a fraction (0.13).
pub fn ndfl_rate() -> Decimal {
    Decimal::new(NDFL_RATE_PERCENT, 2)
}

/// The result of the tax step, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct TaxAmountResult {
    /// The tax on the entered amount.
    pub tax_amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the NDFL on `amount`.
///
/// This is a pure function of the amount alone.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::tax_amount;
/// use salary_engine::models::SalaryAmount;
/// use rust_decimal::Decimal;
///
/// let amount = SalaryAmount::new(100_000).unwrap();
/// assert_eq!(tax_amount(amount), Decimal::from(13_000));
/// ```
pub fn tax_amount(amount: SalaryAmount) -> Decimal {
    amount.to_decimal() * ndfl_rate()
}

/// Calculates the NDFL on `amount` and records an audit step for it.
pub fn calculate_tax_amount(amount: SalaryAmount, step_number: u32) -> TaxAmountResult {
    let rate = ndfl_rate();
    let tax = tax_amount(amount);

    let audit_step = AuditStep {
        step_number,
        rule_id: "ndfl".to_string(),
        rule_name: "NDFL".to_string(),
        input: serde_json::json!({
            "amount": amount.value(),
            "rate": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "tax_amount": tax.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} = {}",
            amount.value(),
            rate.normalize(),
            tax.normalize()
        ),
    };

    TaxAmountResult {
        tax_amount: tax,
        audit_step,
    }
}
