//! Library console entry point

use std::io;

use anyhow::Context;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_console::{
    config::{AppConfig, LoggingConfig},
    console::{self, Console},
    telemetry, Library, Repository,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = init_tracing(&config.logging)?;

    tracing::info!("Starting library console v{}", env!("CARGO_PKG_VERSION"));

    let repository = Repository::new(&config.storage, &config.users);
    let mut library = Library::open(repository, config.users.admin_login.clone())
        .context("Failed to load library data")?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console::run(&mut console, &mut library)?;

    Ok(())
}

/// Send log lines, without colours, to the configured log file
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<WorkerGuard> {
    let appender = rolling::RollingFileAppender::builder()
        .rotation(rolling::Rotation::NEVER)
        .filename_prefix(logging.file.clone())
        .build(&logging.directory)
        .context("Failed to open log file")?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_console={}", logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(telemetry::log_layer(writer))
        .init();

    Ok(guard)
}
