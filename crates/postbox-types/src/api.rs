use serde::{Deserialize, Serialize};

// -- Messages --

/// Body of `POST /api/messages`.
///
/// Every field defaults to `None` so that a missing key and an explicit
/// JSON `null` land in the same place; the validator treats both as absent.
/// Unknown extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct SubmitMessageRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageSavedResponse {
    pub message: String,
}

/// Uniform error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
