//! HTTP API module for the salary engine.
//!
//! This module exposes the mode table, derivation and session transitions
//! as JSON endpoints. Sessions are held by the client and sent with every
//! request.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DeriveRequest, SessionRequest};
pub use response::{ApiError, FormView, SessionResponse};
pub use state::AppState;
