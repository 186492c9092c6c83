//! Application configuration loaded from the environment.

use crate::errors::{Error, Result};

/// Database configuration, connection management, and default data seeding
pub mod database;

/// Runtime settings resolved from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `SeaORM` connection string for the `SQLite` store
    pub database_url: String,
    /// Socket address the HTTP server binds to
    pub listen_addr: String,
}

/// Loads the application configuration from the environment.
///
/// `DATABASE_URL` and `LISTEN_ADDR` both have local-development defaults,
/// so a bare environment works out of the box. The database URL opens the
/// file in read-write-create mode so a fresh checkout starts clean.
pub fn load_app_configuration() -> Result<AppConfig> {
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://expense_tracker.sqlite?mode=rwc".to_string());
    let listen_addr =
        std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string());

    if database_url.trim().is_empty() {
        return Err(Error::Config {
            message: "DATABASE_URL is set but empty".to_string(),
        });
    }

    Ok(AppConfig {
        database_url,
        listen_addr,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_without_env() {
        // Serialized by cargo running unit tests in one process per crate;
        // neither variable is set in CI.
        if std::env::var("DATABASE_URL").is_err() && std::env::var("LISTEN_ADDR").is_err() {
            let config = load_app_configuration().unwrap();
            assert!(config.database_url.starts_with("sqlite://"));
            assert_eq!(config.listen_addr, "127.0.0.1:5000");
        }
    }
}
