use axum::{Json, extract::State, response::IntoResponse};

use postbox_types::api::{MessageSavedResponse, SubmitMessageRequest};

use crate::error::ApiError;
use crate::state::AppState;
use crate::validate;

/// POST /api/messages — validate a contact-form submission and insert it
/// into the message table. 200 with a confirmation on success, 400 when a
/// field is missing or empty, 500 when the store is unreachable or the
/// insert fails.
pub async fn submit_message(
    State(state): State<AppState>,
    Json(req): Json<SubmitMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let submission = validate::validate(req)?;
    let confirmation = state.store.store(&submission).await?;

    Ok(Json(MessageSavedResponse {
        message: confirmation,
    }))
}
