//! User accounts and session identity

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Username to plaintext password, in creation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserAccounts(IndexMap<String, String>);

impl UserAccounts {
    /// Accounts holding only the seeded administrator
    pub fn with_admin(login: &str, password: &str) -> Self {
        let mut accounts = Self::default();
        accounts.insert(login, password);
        accounts
    }

    pub fn contains(&self, login: &str) -> bool {
        self.0.contains_key(login)
    }

    /// Plaintext comparison against the stored password
    pub fn verify(&self, login: &str, password: &str) -> bool {
        self.0.get(login).is_some_and(|stored| stored == password)
    }

    pub fn insert(&mut self, login: &str, password: &str) {
        self.0.insert(login.to_string(), password.to_string());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn logins(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub login: String,
}

impl Identity {
    pub fn new(login: impl Into<String>) -> Self {
        Self { login: login.into() }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.login)
    }
}
