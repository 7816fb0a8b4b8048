use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Bare acknowledgement.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Station deleted successfully.")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Acknowledgement carrying the id of the created row.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = "Feedback submitted successfully.")]
    pub message: String,
    #[schema(example = 1)]
    pub id: i32,
}
