//! Response types for the salary engine API.
//!
//! This module defines the error response structures, the error mapping
//! for the HTTP API, and the form view returned by `/session`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::error::EngineError;
use crate::models::DerivedFigures;
use crate::session::Session;

/// API error response structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a mode not found error response.
    pub fn mode_not_found(id: u32) -> Self {
        Self::with_details(
            "MODE_NOT_FOUND",
            format!("Salary mode not found: {}", id),
            "Known salary mode ids are 1 to 4",
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ValidationRejected { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
            EngineError::ModeNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::mode_not_found(id),
            },
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}

/// What the form should render for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    /// Text for the amount field.
    pub input_text: String,
    /// Whether the amount field is shown for the current mode.
    pub amount_input_visible: bool,
    /// Unit suffix shown after the amount field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_suffix: Option<String>,
    /// The derived figures, when the breakdown is shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<DerivedFigures>,
}

impl FormView {
    /// Builds the view of `session` under the display settings.
    pub fn for_session(session: &Session, display: &DisplayConfig) -> Self {
        let mode = session.mode();
        let breakdown = display
            .shows_breakdown(&mode, session.amount())
            .then(|| session.derived());

        Self {
            input_text: session.input_text(display),
            amount_input_visible: mode.accepts_amount_input(),
            unit_suffix: mode.unit_suffix.map(str::to_string),
            breakdown,
        }
    }
}

/// Response body for the `/session` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    /// The session after the action; unchanged if it was rejected.
    pub session: Session,
    /// Whether the action was applied.
    pub accepted: bool,
    /// Why the action was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<ApiError>,
    /// What the form should render.
    pub view: FormView,
}
