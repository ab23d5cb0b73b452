//! Authentication and account creation

use crate::{
    error::{AppError, AppResult},
    models::Identity,
    repository::Persistence,
};

use super::Library;

impl<P: Persistence> Library<P> {
    /// Authenticate by login and plaintext password
    pub fn authenticate(&self, login: &str, password: &str) -> AppResult<Identity> {
        if self.data.accounts.verify(login, password) {
            tracing::info!("User {} logged in successfully.", login);
            Ok(Identity::new(login))
        } else {
            tracing::warn!("Failed login attempt.");
            Err(AppError::Authentication(
                "Invalid username or password.".to_string(),
            ))
        }
    }

    pub fn username_exists(&self, login: &str) -> bool {
        self.data.accounts.contains(login)
    }

    /// Register a new account. Any password is accepted.
    pub fn create_account(&mut self, login: &str, password: &str) -> AppResult<()> {
        if self.username_exists(login) {
            return Err(AppError::Conflict("Username already exists.".to_string()));
        }

        self.data.accounts.insert(login, password);
        tracing::info!("Account created for user {}.", login);
        self.save()
    }
}
