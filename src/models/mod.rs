//! Core data models for the salary engine.
//!
//! This module contains the salary mode table, the amount type and the
//! derivation outputs.

mod amount;
mod derivation;
mod salary_mode;

pub use amount::SalaryAmount;
pub use derivation::{AuditStep, DerivationResult, DerivedFigures};
pub use salary_mode::{
    DEFAULT_MODE_ID, RateUnit, SALARY_MODES, SalaryMode, find_mode_by_id, list_modes,
};
