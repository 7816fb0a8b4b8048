//! Error response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every non-2xx response. Clients show `message` verbatim.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"message": "User already exists.", "error": "email"}))]
pub struct ErrorResponse {
    pub message: String,
    /// Offending field(s) or the underlying error text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// `"<Entity> not found."`, naming the lookup in `error`.
    pub fn not_found_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new(&format!("{} not found.", display_entity(entity)))
            .with_error(format!("{}={}", field, value))
    }

    /// `"<Entity> already exists."`, naming the clashing field in `error`.
    pub fn duplicate_error(entity: &str, field: &str) -> Self {
        Self::new(&format!("{} already exists.", display_entity(entity))).with_error(field)
    }

    pub fn validation_error(field: &str, reason: &str) -> Self {
        Self::new(reason).with_error(field)
    }
}

/// Table or entity name as a capitalized singular noun: `users` -> `User`.
fn display_entity(entity: &str) -> String {
    let singular = entity.strip_suffix('s').unwrap_or(entity);
    let mut chars = singular.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Resource".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_entity() {
        assert_eq!(display_entity("users"), "User");
        assert_eq!(display_entity("user"), "User");
        assert_eq!(display_entity("stations"), "Station");
        assert_eq!(display_entity("feedback"), "Feedback");
        assert_eq!(display_entity(""), "Resource");
    }

    #[test]
    fn test_duplicate_message() {
        let body = ErrorResponse::duplicate_error("users", "email");
        assert_eq!(body.message, "User already exists.");
        assert_eq!(body.error.as_deref(), Some("email"));
    }

    #[test]
    fn test_error_omitted_when_absent() {
        let json = serde_json::to_value(ErrorResponse::new("Invalid credentials.")).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Invalid credentials."}));
    }
}
