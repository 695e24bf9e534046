//! Request types for the salary engine API.

use serde::{Deserialize, Serialize};

use crate::session::{Session, SessionAction};

/// Request body for the `/derive` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeriveRequest {
    /// The id of the salary mode the amount was entered under.
    pub mode_id: u32,
    /// The entered amount in whole currency units.
    pub amount: u64,
    /// Whether the amount already includes tax.
    #[serde(default)]
    pub tax_included: bool,
}

/// Request body for the `/session` endpoint.
///
/// A missing `session` starts from the initial state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    /// The session the action applies to.
    #[serde(default)]
    pub session: Session,
    /// The user action.
    pub action: SessionAction,
}
