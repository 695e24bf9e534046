//! Derivation result models.
//!
//! This module contains the [`DerivedFigures`] produced from an entered
//! amount, and the [`AuditStep`] trace that explains how each figure was
//! reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{SalaryAmount, SalaryMode};

/// The three figures derived from an entered amount.
///
/// Figures are not rounded; formatting for display (currency symbol,
/// fraction digits) belongs to the presentation layer.
///
/// # Example
///
/// ```
/// use salary_engine::models::DerivedFigures;
/// use rust_decimal::Decimal;
///
/// let figures = DerivedFigures {
///     take_home: Decimal::from(87_000),
///     tax_amount: Decimal::from(13_000),
///     employer_cost: Decimal::from(100_000),
/// };
/// assert_eq!(figures.take_home + figures.tax_amount, figures.employer_cost);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedFigures {
    /// What the employee receives after tax.
    pub take_home: Decimal,
    /// The statutory income tax (NDFL).
    pub tax_amount: Decimal,
    /// What the employer pays out in total.
    pub employer_cost: Decimal,
}

impl DerivedFigures {
    /// Figures for an empty amount.
    pub const ZERO: DerivedFigures = DerivedFigures {
        take_home: Decimal::ZERO,
        tax_amount: Decimal::ZERO,
        employer_cost: Decimal::ZERO,
    };
}

/// A single step in the audit trace recording a derivation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of a derivation with its audit trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationResult {
    /// The mode id the amount was entered under.
    pub mode_id: u32,
    /// The entered amount.
    pub amount: SalaryAmount,
    /// Whether the amount already included tax.
    pub tax_included: bool,
    /// The derived figures.
    pub figures: DerivedFigures,
    /// Ordered steps explaining the figures.
    pub audit_steps: Vec<AuditStep>,
}

impl DerivationResult {
    /// Creates an empty result for the given inputs, to be filled by the
    /// derivation steps.
    pub(crate) fn start(mode: &SalaryMode, amount: SalaryAmount, tax_included: bool) -> Self {
        Self {
            mode_id: mode.id,
            amount,
            tax_included,
            figures: DerivedFigures::ZERO,
            audit_steps: Vec::new(),
        }
    }
}
