//! Calculation logic for the salary engine.
//!
//! This module contains the fixed NDFL rate, the tax amount calculation and
//! the derivation of take-home pay and employer cost.

mod derive;
mod tax;

pub use derive::{derive, derive_with_audit};
pub use tax::{NDFL_RATE_PERCENT, TaxAmountResult, calculate_tax_amount, ndfl_rate, tax_amount};
