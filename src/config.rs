//! Configuration management for the library console

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub books_file: String,
    pub borrowed_file: String,
    pub users_file: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: PathBuf,
    pub file: String,
}

/// Seed account written to the accounts file when none exists yet
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UsersConfig {
    pub admin_login: String,
    pub admin_password: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub users: UsersConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Optional defaults file; every key also has a built-in default
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix LIBRARY_), e.g. LIBRARY_STORAGE__DATA_DIR
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl StorageConfig {
    pub fn books_path(&self) -> PathBuf {
        self.data_dir.join(&self.books_file)
    }

    pub fn borrowed_path(&self) -> PathBuf {
        self.data_dir.join(&self.borrowed_file)
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(&self.users_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            books_file: "book_records.json".to_string(),
            borrowed_file: "borrowed_books.json".to_string(),
            users_file: "user_accounts.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: PathBuf::from("."),
            file: "library.log".to_string(),
        }
    }
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            admin_login: "admin".to_string(),
            admin_password: "password".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let storage = StorageConfig::default();
        assert_eq!(storage.books_path(), PathBuf::from("./book_records.json"));
        assert_eq!(storage.borrowed_path(), PathBuf::from("./borrowed_books.json"));
        assert_eq!(storage.users_path(), PathBuf::from("./user_accounts.json"));
    }

    #[test]
    fn test_default_admin() {
        let config = AppConfig::default();
        assert_eq!(config.users.admin_login, "admin");
        assert_eq!(config.logging.file, "library.log");
    }
}
