//! Account registration from the sign-up form.

use serde::Deserialize;
use tracing::info;

use super::password::hash_password;
use crate::db::repository::{RepositoryError, UserRepository};
use crate::models::{NewUser, User};

/// The three fields posted by the registration form.
///
/// Missing fields deserialize as empty strings so that validation, not the
/// extractor, decides what happens.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl RegistrationForm {
    /// Name of the first empty field, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Validate the form, hash the password and store the account.
///
/// Name and email are stored verbatim; no trimming, uniqueness or format
/// checks are applied.
pub async fn register_user<R>(repo: &R, form: RegistrationForm) -> Result<User, RegistrationError>
where
    R: UserRepository + ?Sized,
{
    if let Some(field) = form.missing_field() {
        return Err(RegistrationError::MissingField(field));
    }

    let password = form.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| RegistrationError::Hashing(format!("Task join error: {}", e)))?
        .map_err(|e| RegistrationError::Hashing(e.to_string()))?;

    let user = repo
        .create_user(NewUser {
            name: form.name,
            email: form.email,
            password_hash,
        })
        .await?;

    info!(action = "user_created", status = "success", user_id = %user.id, "User created successfully");
    Ok(user)
}
