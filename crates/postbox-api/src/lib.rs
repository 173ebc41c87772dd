//! HTTP layer for the postbox contact-form backend: a single submission
//! route with a presence validator in front of the message store.

pub mod error;
pub mod messages;
pub mod state;
pub mod validate;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Build the API router. The caller owns the state (and the pool inside
/// it), so tests can drive the production routing end to end.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/messages", post(messages::submit_message))
        .with_state(state)
}
