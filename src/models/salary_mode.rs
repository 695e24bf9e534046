//! Salary mode table.
//!
//! This module defines the closed set of salary modes a user can pick to
//! describe how an entered amount should be understood. The table is fixed
//! at compile time; every lookup goes through [`SALARY_MODES`].

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The display unit a salary mode attaches to the entered amount.
///
/// The unit never alters the arithmetic: the engine treats every amount as
/// a single abstract period value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateUnit {
    /// A monthly salary.
    Monthly,
    /// The statutory minimum wage (МРОТ).
    StatutoryMinimum,
    /// A per-day rate.
    Daily,
    /// A per-hour rate.
    Hourly,
}

/// One entry of the salary mode table.
///
/// # Example
///
/// ```
/// use salary_engine::models::{RateUnit, SalaryMode};
///
/// let mode = SalaryMode::default();
/// assert_eq!(mode.id, 1);
/// assert_eq!(mode.rate_unit, RateUnit::Monthly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SalaryMode {
    /// Stable identity, ordering and selection key.
    pub id: u32,
    /// Label shown next to the mode selector.
    pub label: &'static str,
    /// The unit this mode attaches to the amount.
    pub rate_unit: RateUnit,
    /// Suffix shown after the amount field (e.g. "в день").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_suffix: Option<&'static str>,
    /// Explanatory tooltip text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

/// The id of the mode selected when a session starts.
pub const DEFAULT_MODE_ID: u32 = 1;

/// The fixed salary mode table, in display order.
pub static SALARY_MODES: [SalaryMode; 4] = [
    SalaryMode {
        id: 1,
        label: "Оклад за месяц",
        rate_unit: RateUnit::Monthly,
        unit_suffix: None,
        hint: None,
    },
    SalaryMode {
        id: 2,
        label: "МРОТ",
        rate_unit: RateUnit::StatutoryMinimum,
        unit_suffix: None,
        hint: Some("МРОТ - минимальный размер оплаты труда. Разный для разных регионов."),
    },
    SalaryMode {
        id: 3,
        label: "Оплата за день",
        rate_unit: RateUnit::Daily,
        unit_suffix: Some("в день"),
        hint: None,
    },
    SalaryMode {
        id: 4,
        label: "Оплата за час",
        rate_unit: RateUnit::Hourly,
        unit_suffix: Some("в час"),
        hint: None,
    },
];

impl SalaryMode {
    /// Returns true if the presentation layer should offer an amount field
    /// for this mode. The statutory minimum has no user-entered amount.
    pub fn accepts_amount_input(&self) -> bool {
        self.rate_unit != RateUnit::StatutoryMinimum
    }
}

impl Default for SalaryMode {
    fn default() -> Self {
        SALARY_MODES[0]
    }
}

/// Returns every salary mode in table order.
///
/// The slice is `'static`, so callers can iterate it as many times as
/// they like and always observe the same four modes.
pub fn list_modes() -> &'static [SalaryMode] {
    &SALARY_MODES
}

/// Looks up a salary mode by its id.
///
/// # Errors
///
/// Returns [`EngineError::ModeNotFound`] for any id outside the table.
/// Selection handling is expected to ignore the change in that case.
///
/// # Examples
///
/// ```
/// use salary_engine::models::{find_mode_by_id, RateUnit};
///
/// let mode = find_mode_by_id(2).unwrap();
/// assert_eq!(mode.rate_unit, RateUnit::StatutoryMinimum);
/// assert!(find_mode_by_id(99).is_err());
/// ```
pub fn find_mode_by_id(id: u32) -> EngineResult<SalaryMode> {
    SALARY_MODES
        .iter()
        .find(|mode| mode.id == id)
        .copied()
        .ok_or(EngineError::ModeNotFound { id })
}
