//! Library book management console
//!
//! A single-user catalog of book records kept in flat JSON files, with
//! borrow/return bookkeeping and an admin-only gate on catalog changes.

pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod telemetry;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use repository::{Persistence, Repository};
pub use services::Library;
