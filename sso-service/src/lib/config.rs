use std::env;
use std::time::Duration;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use secrecy::ExposeSecret;
use secrecy::SecretString;
use serde::Deserialize;

/// Longest accepted access token lifetime (one year).
pub const MAX_TOKEN_TTL_SECONDS: i64 = 365 * 24 * 60 * 60;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub auth_port: u16,
    pub validator_port: u16,
    pub request_timeout_secs: u64,
}

/// Postgres settings. Without a `url` users are kept in memory.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: SecretString,
    pub ttl_seconds: i64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl DatabaseConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }
}

impl JwtConfig {
    pub fn ttl(&self) -> Result<chrono::Duration, ConfigError> {
        chrono::TimeDelta::try_seconds(self.ttl_seconds).ok_or_else(|| {
            ConfigError::Message(format!(
                "jwt.ttl_seconds {} is out of range",
                self.ttl_seconds
            ))
        })
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SSO__JWT__SECRET, SSO__SERVER__AUTH_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("server.auth_port", 44044)?
            .set_default("server.validator_port", 44045)?
            .set_default("server.request_timeout_secs", 10)?
            .set_default("database.max_connections", 25)?
            .set_default("database.idle_timeout_secs", 120)?
            .set_default("database.max_lifetime_secs", 300)?
            .set_default("jwt.ttl_seconds", 300)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: SSO__JWT__SECRET=... overrides jwt.secret
            .add_source(
                Environment::with_prefix("SSO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values that would make the service unusable or insecure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.expose_secret().is_empty() {
            return Err(ConfigError::Message("jwt.secret must not be empty".to_string()));
        }
        if self.jwt.ttl_seconds <= 0 {
            return Err(ConfigError::Message(
                "jwt.ttl_seconds must be positive".to_string(),
            ));
        }
        if self.jwt.ttl_seconds > MAX_TOKEN_TTL_SECONDS {
            return Err(ConfigError::Message(format!(
                "jwt.ttl_seconds must be at most {}",
                MAX_TOKEN_TTL_SECONDS
            )));
        }
        if self.server.auth_port == self.server.validator_port {
            return Err(ConfigError::Message(
                "server.auth_port and server.validator_port must differ".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str, ttl_seconds: i64) -> Config {
        Config {
            server: ServerConfig {
                auth_port: 44044,
                validator_port: 44045,
                request_timeout_secs: 10,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 25,
                idle_timeout_secs: 120,
                max_lifetime_secs: 300,
            },
            jwt: JwtConfig {
                secret: SecretString::new(secret.to_string()),
                ttl_seconds,
            },
        }
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        let config = config("test-secret-key-for-jwt-signing-at-least-32-bytes", 300);

        assert!(config.validate().is_ok());
        assert_eq!(config.jwt.ttl().unwrap(), chrono::Duration::minutes(5));
        assert_eq!(config.server.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_validate_rejects_empty_secret() {
        assert!(config("", 300).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_ttl() {
        assert!(config("secret", 0).validate().is_err());
        assert!(config("secret", -5).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_ttl_beyond_one_year() {
        assert!(config("secret", MAX_TOKEN_TTL_SECONDS).validate().is_ok());
        assert!(config("secret", MAX_TOKEN_TTL_SECONDS + 1).validate().is_err());
        assert!(config("secret", 10_000_000_000_000).validate().is_err());
        assert!(config("secret", i64::MAX).validate().is_err());
    }

    #[test]
    fn test_ttl_out_of_range_is_an_error() {
        assert!(config("secret", i64::MAX).jwt.ttl().is_err());
        assert_eq!(
            config("secret", MAX_TOKEN_TTL_SECONDS).jwt.ttl().unwrap(),
            chrono::Duration::days(365)
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = config("super-secret-value", 300);

        assert!(!format!("{:?}", config).contains("super-secret-value"));
    }
}
