//! User accounts file

use crate::{config::UsersConfig, error::AppResult, models::UserAccounts};

use super::file::SnapshotFile;

#[derive(Debug, Clone)]
pub struct UsersRepository {
    file: SnapshotFile<UserAccounts>,
    seed: UsersConfig,
}

impl UsersRepository {
    pub fn new(file: SnapshotFile<UserAccounts>, seed: UsersConfig) -> Self {
        Self { file, seed }
    }

    /// Load the accounts; a missing file yields only the seeded admin
    pub fn load(&self) -> AppResult<UserAccounts> {
        match self.file.read()? {
            Some(accounts) => Ok(accounts),
            None => {
                tracing::debug!(
                    "No accounts file at {}, seeding admin account",
                    self.file.path().display()
                );
                Ok(UserAccounts::with_admin(
                    &self.seed.admin_login,
                    &self.seed.admin_password,
                ))
            }
        }
    }

    pub fn save(&self, accounts: &UserAccounts) -> AppResult<()> {
        self.file.write(accounts)
    }
}
