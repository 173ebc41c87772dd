use tracing::debug;

use postbox_types::api::SubmitMessageRequest;
use postbox_types::models::Submission;

use crate::error::ApiError;

/// Accept the submission only when all three fields are present and
/// non-empty. Which field is missing does not matter; the rejection carries
/// the same fixed reason either way. Values are taken verbatim (no trimming
/// and no email format check, so a whitespace-only string counts as
/// present).
pub fn validate(req: SubmitMessageRequest) -> Result<Submission, ApiError> {
    let name = req.name.filter(|f| !f.is_empty());
    let email = req.email.filter(|f| !f.is_empty());
    let message = req.message.filter(|f| !f.is_empty());

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) => Ok(Submission {
            name,
            email,
            message,
        }),
        _ => {
            debug!("Validation failed: all fields are required");
            Err(ApiError::Validation)
        }
    }
}
