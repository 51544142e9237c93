//! Credential checks against the `Users` table.

use crate::storage::RecordStore;

use super::{ServiceError, ServiceResult};

pub struct UserService;

impl UserService {
    /// Verifies a username/password pair and returns the signed-in name.
    pub fn login(store: &dyn RecordStore, username: &str, password: &str) -> ServiceResult<String> {
        if username.trim().is_empty() {
            return Err(ServiceError::Invalid("Please select your name".into()));
        }
        if password.is_empty() {
            return Err(ServiceError::Invalid("Please enter password".into()));
        }
        let users = store.read_users()?;
        let user = users
            .iter()
            .find(|user| user.username == username)
            .ok_or_else(|| ServiceError::NotFound(format!("User `{}`", username)))?;
        if !user.password_matches(password) {
            tracing::warn!(username, "rejected login attempt");
            return Err(ServiceError::Unauthorized("Incorrect password".into()));
        }
        tracing::info!(username, "user signed in");
        Ok(user.username.clone())
    }
}
