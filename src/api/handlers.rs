//! HTTP request handlers for the salary engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::derive_with_audit;
use crate::error::EngineResult;
use crate::models::{DerivationResult, SalaryAmount, find_mode_by_id, list_modes};

use super::request::{DeriveRequest, SessionRequest};
use super::response::{ApiError, ApiErrorResponse, FormView, SessionResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/modes", get(modes_handler))
        .route("/derive", post(derive_handler))
        .route("/session", post(session_handler))
        .with_state(state)
}

/// Handler for GET /modes.
///
/// Returns the salary mode table in display order.
async fn modes_handler() -> impl IntoResponse {
    Json(list_modes())
}

/// Handler for POST /derive.
///
/// Derives take-home pay, tax and employer cost with an audit trace.
async fn derive_handler(
    payload: Result<Json<DeriveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing derive request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match perform_derivation(&request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                mode_id = result.mode_id,
                amount = result.amount.value(),
                tax_included = result.tax_included,
                employer_cost = %result.figures.employer_cost,
                "Derivation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Derivation rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

/// Resolves the request's mode and amount, then derives.
fn perform_derivation(request: &DeriveRequest) -> EngineResult<DerivationResult> {
    let mode = find_mode_by_id(request.mode_id)?;
    let amount = SalaryAmount::new(request.amount)?;
    Ok(derive_with_audit(&mode, amount, request.tax_included))
}

/// Handler for POST /session.
///
/// Applies one user action to the client's session. A rejected action is
/// not an HTTP error: the previous session comes back with
/// `accepted: false`.
async fn session_handler(
    State(state): State<AppState>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing session action");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let (session, rejection) = match request.session.try_apply(&request.action, config.input()) {
        Ok(next) => (next, None),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Session action rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            (request.session, Some(api_error.error))
        }
    };

    let response = SessionResponse {
        session,
        accepted: rejection.is_none(),
        rejection,
        view: FormView::for_session(&session, config.display()),
    };
    info!(
        correlation_id = %correlation_id,
        mode_id = session.mode().id,
        accepted = response.accepted,
        "Session action processed"
    );
    json_response(StatusCode::OK, response)
}

/// Maps a JSON extraction failure to a 400 response.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
