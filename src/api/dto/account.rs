//! Signup, login and user listing DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::dto::format_timestamp;
use crate::models::User;
use crate::services::Registration;
use crate::utils::validate::not_blank;

// ============================================================================
// Request DTOs
// ============================================================================

/// Signup form: the account plus the user's vehicle.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[schema(example = json!({
    "username": "ana",
    "email": "ana@example.com",
    "password": "s3cret",
    "vehicle_number": "KA01AB1234",
    "model": "Nexon EV",
    "brand": "Tata"
}))]
pub struct SignupRequest {
    #[validate(
        required(message = "All fields are required."),
        custom(function = "not_blank", message = "All fields are required.")
    )]
    pub username: Option<String>,
    #[validate(
        required(message = "All fields are required."),
        custom(function = "not_blank", message = "All fields are required.")
    )]
    #[schema(format = "email")]
    pub email: Option<String>,
    #[validate(
        required(message = "All fields are required."),
        custom(function = "not_blank", message = "All fields are required.")
    )]
    #[schema(format = "password")]
    pub password: Option<String>,
    #[validate(
        required(message = "All fields are required."),
        custom(function = "not_blank", message = "All fields are required.")
    )]
    pub vehicle_number: Option<String>,
    pub model: Option<String>,
    pub brand: Option<String>,
}

impl SignupRequest {
    /// Call after validation; required fields are then present.
    pub fn into_registration(self) -> Registration {
        Registration {
            username: self.username.unwrap_or_default().trim().to_string(),
            email: self.email.unwrap_or_default().trim().to_string(),
            password: self.password.unwrap_or_default(),
            vehicle_number: self.vehicle_number.unwrap_or_default().trim().to_string(),
            model: self.model,
            brand: self.brand,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(
        required(message = "All fields are required."),
        custom(function = "not_blank", message = "All fields are required.")
    )]
    #[schema(example = "ana@example.com", format = "email")]
    pub email: Option<String>,
    #[validate(
        required(message = "All fields are required."),
        custom(function = "not_blank", message = "All fields are required.")
    )]
    #[schema(example = "s3cret", format = "password")]
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn credentials(&self) -> (&str, &str) {
        (
            self.email.as_deref().map(str::trim).unwrap_or_default(),
            self.password.as_deref().unwrap_or_default(),
        )
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// The identity payload the client keeps as its "current user".
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserInfo {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "ana")]
    pub username: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(example = "user")]
    pub role: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    pub user: UserInfo,
}

/// Admin listing entry. Never includes the password hash.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
    #[schema(example = "2025-01-10T08:05:03.250Z")]
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            created_at: format_timestamp(&user.created_at.to_jiff()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_requires_core_fields() {
        let request: SignupRequest = serde_json::from_value(serde_json::json!({
            "username": "ana",
            "email": "ana@example.com",
            "password": ""
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("vehicle_number"));
        assert!(!fields.contains_key("username"));
        assert_eq!(
            fields["vehicle_number"][0].message.as_deref(),
            Some("All fields are required.")
        );
    }

    #[test]
    fn test_signup_optional_fields_may_be_absent() {
        let request: SignupRequest = serde_json::from_value(serde_json::json!({
            "username": " ana ",
            "email": "ana@example.com",
            "password": "s3cret",
            "vehicle_number": "KA01AB1234"
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        let registration = request.into_registration();
        assert_eq!(registration.username, "ana");
        assert_eq!(registration.model, None);
    }

    #[test]
    fn test_login_rejects_blank_email() {
        let request: LoginRequest =
            serde_json::from_value(serde_json::json!({"email": "  ", "password": "x"})).unwrap();
        assert!(request.validate().is_err());
    }
}
