//! Take-home pay and employer cost derivation.
//!
//! Given a salary mode, an entered amount and the tax-inclusion flag, this
//! module derives the three figures shown to the user. Every mode shares the
//! same formulas; the mode only decides which unit label the presentation
//! layer puts next to the result.

use rust_decimal::Decimal;
use tracing::trace;

use crate::models::{AuditStep, DerivationResult, DerivedFigures, SalaryAmount, SalaryMode};

use super::tax::{calculate_tax_amount, tax_amount};

/// Derives take-home pay, tax and employer cost from an entered amount.
///
/// - tax included: take-home = amount - tax, employer cost = amount
/// - tax not included: take-home = amount, employer cost = amount + tax
///
/// The figures are not rounded.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::derive;
/// use salary_engine::models::{SalaryAmount, SalaryMode};
/// use rust_decimal::Decimal;
///
/// let amount = SalaryAmount::new(100_000).unwrap();
/// let figures = derive(&SalaryMode::default(), amount, true);
/// assert_eq!(figures.take_home, Decimal::from(87_000));
/// assert_eq!(figures.tax_amount, Decimal::from(13_000));
/// assert_eq!(figures.employer_cost, Decimal::from(100_000));
/// ```
pub fn derive(mode: &SalaryMode, amount: SalaryAmount, tax_included: bool) -> DerivedFigures {
    trace!(
        mode_id = mode.id,
        amount = amount.value(),
        tax_included,
        "Deriving salary figures"
    );

    let value = amount.to_decimal();
    let tax = tax_amount(amount);
    let (take_home, employer_cost) = split(value, tax, tax_included);

    DerivedFigures {
        take_home,
        tax_amount: tax,
        employer_cost,
    }
}

/// Derives the same figures as [`derive`] and records an audit trace of
/// the tax, take-home and employer-cost steps.
pub fn derive_with_audit(
    mode: &SalaryMode,
    amount: SalaryAmount,
    tax_included: bool,
) -> DerivationResult {
    let mut result = DerivationResult::start(mode, amount, tax_included);
    let value = amount.to_decimal();

    let tax_result = calculate_tax_amount(amount, 1);
    let tax = tax_result.tax_amount;
    result.audit_steps.push(tax_result.audit_step);

    let (take_home, employer_cost) = split(value, tax, tax_included);

    let take_home_reasoning = if tax_included {
        format!(
            "Amount includes tax: {} - {} = {}",
            amount.value(),
            tax.normalize(),
            take_home.normalize()
        )
    } else {
        format!(
            "Amount excludes tax: employee receives the full {}",
            amount.value()
        )
    };
    result.audit_steps.push(AuditStep {
        step_number: 2,
        rule_id: "take_home".to_string(),
        rule_name: "Take-home Pay".to_string(),
        input: serde_json::json!({
            "amount": amount.value(),
            "tax_amount": tax.normalize().to_string(),
            "tax_included": tax_included
        }),
        output: serde_json::json!({
            "take_home": take_home.normalize().to_string()
        }),
        reasoning: take_home_reasoning,
    });

    let employer_cost_reasoning = if tax_included {
        format!(
            "Amount includes tax: employer pays the full {}",
            amount.value()
        )
    } else {
        format!(
            "Amount excludes tax: {} + {} = {}",
            amount.value(),
            tax.normalize(),
            employer_cost.normalize()
        )
    };
    result.audit_steps.push(AuditStep {
        step_number: 3,
        rule_id: "employer_cost".to_string(),
        rule_name: "Employer Cost".to_string(),
        input: serde_json::json!({
            "amount": amount.value(),
            "tax_amount": tax.normalize().to_string(),
            "tax_included": tax_included
        }),
        output: serde_json::json!({
            "employer_cost": employer_cost.normalize().to_string()
        }),
        reasoning: employer_cost_reasoning,
    });

    result.figures = DerivedFigures {
        take_home,
        tax_amount: tax,
        employer_cost,
    };
    result
}

/// Returns `(take_home, employer_cost)` for an amount and its tax.
fn split(value: Decimal, tax: Decimal, tax_included: bool) -> (Decimal, Decimal) {
    if tax_included {
        (value - tax, value)
    } else {
        (value, value + tax)
    }
}
