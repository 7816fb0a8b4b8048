//! Account service: signup, login and the admin user listing.

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, SignupVehicle, User};
use crate::repositories::UserRepository;
use crate::utils::password::{hash_password, verify_password};

const INVALID_CREDENTIALS: &str = "Invalid credentials.";

/// Signup form contents after presence validation.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub vehicle_number: String,
    pub model: Option<String>,
    pub brand: Option<String>,
}

#[derive(Clone)]
pub struct AccountService {
    repo: UserRepository,
}

impl AccountService {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    /// Registers a user together with their vehicle.
    ///
    /// The password is hashed before it reaches the repository. Blank
    /// `model`/`brand` values are stored as NULL.
    ///
    /// # Returns
    /// The created user, or `Duplicate` when the email or username is taken
    pub async fn register(&self, registration: Registration) -> AppResult<User> {
        let Registration {
            username,
            email,
            password,
            vehicle_number,
            model,
            brand,
        } = registration;

        let new_user = NewUser {
            username,
            email,
            password: hash_password(&password)?,
        };
        let vehicle = SignupVehicle {
            vehicle_number,
            model: non_blank(model),
            brand: non_blank(brand),
        };

        let (user, vehicle) = self.repo.register_with_vehicle(new_user, vehicle).await?;
        tracing::info!(
            user_id = user.id,
            vehicle_id = vehicle.id,
            username = %user.username,
            "user registered"
        );
        Ok(user)
    }

    /// Checks an email/password pair. Unknown emails and wrong passwords
    /// produce the same `Unauthorized` error.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let Some(user) = self.repo.find_by_email(email).await? else {
            tracing::debug!("login rejected: unknown email");
            return Err(invalid_credentials());
        };

        if !verify_password(password, &user.password) {
            tracing::debug!(user_id = user.id, "login rejected: password mismatch");
            return Err(invalid_credentials());
        }

        tracing::info!(user_id = user.id, "user logged in");
        Ok(user)
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list_all().await
    }
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized {
        message: INVALID_CREDENTIALS.to_string(),
    }
}

/// `None` for absent or whitespace-only input.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(Some("Nexon".to_string())), Some("Nexon".to_string()));
    }

    #[test]
    fn test_invalid_credentials_is_unauthorized() {
        match invalid_credentials() {
            AppError::Unauthorized { message } => assert_eq!(message, "Invalid credentials."),
            other => panic!("Expected Unauthorized, got {:?}", other),
        }
    }
}
