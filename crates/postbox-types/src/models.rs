use serde::{Deserialize, Serialize};

/// A contact-form submission that has passed validation: all three fields
/// present and non-empty. It lives for the duration of one request; the
/// store copies the fields verbatim into a row and assigns the id itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}
