//! Form session state.
//!
//! A [`Session`] is the selection state of one calculator form: the chosen
//! salary mode, the tax-inclusion flag and the entered amount. It is an
//! immutable value; every user action produces a new session. Rejected
//! actions leave the previous session in place.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::derive;
use crate::config::{DisplayConfig, InputConfig};
use crate::error::{EngineError, EngineResult};
use crate::input::{format_for_editing_with, parse_amount_input};
use crate::models::{DerivedFigures, SalaryAmount, SalaryMode, find_mode_by_id};

/// A discrete user action on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionAction {
    /// A salary mode option was selected.
    SelectMode {
        /// The id of the selected mode.
        mode_id: u32,
    },
    /// The tax-inclusion toggle was switched.
    SetTaxIncluded {
        /// Whether the entered amount includes tax.
        included: bool,
    },
    /// The amount field text changed.
    InputChanged {
        /// The full text of the field after the keystroke.
        text: String,
    },
}

/// The serialized form of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// The id of the selected salary mode.
    pub mode_id: u32,
    /// Whether the entered amount includes tax.
    #[serde(default)]
    pub tax_included: bool,
    /// The entered amount.
    #[serde(default)]
    pub amount: SalaryAmount,
}

/// The selection state of one calculator form.
///
/// Mode and flag change freely in any order; there are no terminal states.
///
/// # Example
///
/// ```
/// use salary_engine::config::InputConfig;
/// use salary_engine::session::{Session, SessionAction};
///
/// let input = InputConfig::default();
/// let session = Session::new()
///     .apply(&SessionAction::SetTaxIncluded { included: true }, &input)
///     .apply(&SessionAction::InputChanged { text: "100 000".into() }, &input);
///
/// assert_eq!(session.amount().value(), 100_000);
/// assert_eq!(session.derived().take_home.to_string(), "87000.00");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionState", into = "SessionState")]
pub struct Session {
    mode: SalaryMode,
    tax_included: bool,
    amount: SalaryAmount,
}

impl Session {
    /// Creates a session in the initial state: monthly, tax not included,
    /// no amount.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected salary mode.
    pub fn mode(&self) -> SalaryMode {
        self.mode
    }

    /// Returns whether the entered amount includes tax.
    pub fn tax_included(&self) -> bool {
        self.tax_included
    }

    /// Returns the entered amount.
    pub fn amount(&self) -> SalaryAmount {
        self.amount
    }

    /// Returns a session with the mode `mode_id` selected.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ModeNotFound`] for an unknown id.
    pub fn select_mode(self, mode_id: u32) -> EngineResult<Self> {
        let mode = find_mode_by_id(mode_id)?;
        Ok(Self { mode, ..self })
    }

    /// Returns a session with the tax-inclusion flag set to `included`.
    pub fn with_tax_included(self, included: bool) -> Self {
        Self {
            tax_included: included,
            ..self
        }
    }

    /// Returns a session holding the amount parsed from `text`.
    ///
    /// Text longer than `input.max_length` characters is refused here,
    /// before it reaches normalization.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ValidationRejected`] for over-long or
    /// malformed text.
    pub fn input_changed(self, text: &str, input: &InputConfig) -> EngineResult<Self> {
        if text.chars().count() > input.max_length {
            return Err(EngineError::rejected(
                text,
                format!("longer than {} characters", input.max_length),
            ));
        }
        let amount = parse_amount_input(text)?;
        Ok(Self { amount, ..self })
    }

    /// Applies `action`, reporting why it was refused if it was.
    pub fn try_apply(&self, action: &SessionAction, input: &InputConfig) -> EngineResult<Self> {
        match action {
            SessionAction::SelectMode { mode_id } => self.select_mode(*mode_id),
            SessionAction::SetTaxIncluded { included } => Ok(self.with_tax_included(*included)),
            SessionAction::InputChanged { text } => self.input_changed(text, input),
        }
    }

    /// Applies `action`, keeping the current session if it is refused.
    pub fn apply(&self, action: &SessionAction, input: &InputConfig) -> Self {
        match self.try_apply(action, input) {
            Ok(next) => next,
            Err(err) => {
                debug!(error = %err, "Session action ignored");
                *self
            }
        }
    }

    /// Derives the figures for the current state.
    pub fn derived(&self) -> DerivedFigures {
        derive(&self.mode, self.amount, self.tax_included)
    }

    /// Returns the text the amount field should display.
    pub fn input_text(&self, display: &DisplayConfig) -> String {
        format_for_editing_with(self.amount, display.group_separator)
    }
}

impl TryFrom<SessionState> for Session {
    type Error = EngineError;

    fn try_from(state: SessionState) -> Result<Self, Self::Error> {
        Ok(Self {
            mode: find_mode_by_id(state.mode_id)?,
            tax_included: state.tax_included,
            amount: state.amount,
        })
    }
}

impl From<Session> for SessionState {
    fn from(session: Session) -> Self {
        Self {
            mode_id: session.mode.id,
            tax_included: session.tax_included,
            amount: session.amount,
        }
    }
}
