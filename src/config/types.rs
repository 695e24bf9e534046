//! Configuration types for the salary engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `engine.yaml`. Every field has a default, so an
//! empty file yields the built-in configuration.

use serde::Deserialize;

use crate::input::DEFAULT_GROUP_SEPARATOR;
use crate::models::{DEFAULT_MODE_ID, SalaryAmount, SalaryMode};

/// Settings for the boundary that collects raw amount text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Longest raw text, in characters, passed on to normalization.
    pub max_length: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_length: SalaryAmount::MAX_DIGITS,
        }
    }
}

/// Settings for how figures are presented.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Separator placed between digit groups in the amount field.
    pub group_separator: char,
    /// Mode ids for which the derived-figures breakdown is shown.
    pub breakdown_modes: Vec<u32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            group_separator: DEFAULT_GROUP_SEPARATOR,
            breakdown_modes: vec![DEFAULT_MODE_ID],
        }
    }
}

impl DisplayConfig {
    /// Returns true if the breakdown should be shown for `mode` and `amount`.
    ///
    /// Nothing is shown until an amount has been entered.
    pub fn shows_breakdown(&self, mode: &SalaryMode, amount: SalaryAmount) -> bool {
        !amount.is_zero() && self.breakdown_modes.contains(&mode.id)
    }
}

/// The complete engine configuration loaded from `engine.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Input boundary settings.
    pub input: InputConfig,
    /// Presentation settings.
    pub display: DisplayConfig,
}
