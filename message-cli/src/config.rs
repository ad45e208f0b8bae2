use anyhow::{Context, Result};
use message_store::DEFAULT_MAX_TEXT_LENGTH;
use std::env;

/// Application configuration, loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    /// Upper bound on message text length used when validating `add`.
    pub max_text_length: usize,
    pub log_file: String,
}

impl AppConfig {
    /// Loads configuration from the environment.
    /// `database_url` overrides DATABASE_URL when given.
    pub fn load(database_url: Option<String>) -> Result<Self> {
        let database_url = database_url
            .or_else(|| env::var("DATABASE_URL").ok())
            .unwrap_or_else(|| "sqlite:messages.db".to_string());
        let max_text_length = match env::var("MESSAGE_MAX_LENGTH") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("MESSAGE_MAX_LENGTH must be a number, got {:?}", raw))?,
            Err(_) => DEFAULT_MAX_TEXT_LENGTH,
        };
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/messages.log".to_string());

        Ok(Self {
            database_url,
            max_text_length,
            log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("DATABASE_URL");
        env::remove_var("MESSAGE_MAX_LENGTH");
        env::remove_var("LOG_FILE");
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();

        let config = AppConfig::load(None).unwrap();

        assert_eq!(config.database_url, "sqlite:messages.db");
        assert_eq!(config.max_text_length, 250);
        assert_eq!(config.log_file, "logs/messages.log");
    }

    #[test]
    #[serial]
    fn test_load_config_from_env() {
        clear_env();
        env::set_var("DATABASE_URL", "sqlite::memory:");
        env::set_var("MESSAGE_MAX_LENGTH", "200");
        env::set_var("LOG_FILE", "/tmp/messages-test.log");

        let config = AppConfig::load(None).unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_text_length, 200);
        assert_eq!(config.log_file, "/tmp/messages-test.log");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_database_url_override_wins() {
        clear_env();
        env::set_var("DATABASE_URL", "sqlite:from-env.db");

        let config = AppConfig::load(Some("sqlite:from-flag.db".to_string())).unwrap();

        assert_eq!(config.database_url, "sqlite:from-flag.db");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_max_length_is_rejected() {
        clear_env();
        env::set_var("MESSAGE_MAX_LENGTH", "lots");

        let err = AppConfig::load(None).unwrap_err();

        assert!(err.to_string().contains("MESSAGE_MAX_LENGTH"));
        clear_env();
    }
}
