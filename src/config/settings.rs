//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use super::constants::{ENV_DATABASE_NAME, ENV_DATABASE_URL, ENV_PASSWORD_SCHEME};

/// Hashing scheme applied to passwords of newly registered users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordScheme {
    /// `salt$hex(sha256(salt ++ password))`, compatible with existing records
    #[default]
    SaltedSha256,
    /// Argon2id PHC strings
    Argon2,
}

impl FromStr for PasswordScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "salted-sha256" => Ok(PasswordScheme::SaltedSha256),
            "argon2" | "argon2id" => Ok(PasswordScheme::Argon2),
            other => Err(format!("unknown password scheme '{}'", other)),
        }
    }
}

/// Application configuration
#[derive(Clone, Default)]
pub struct Config {
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub password_scheme: PasswordScheme,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url.as_ref().map(|_| "[REDACTED]"))
            .field("database_name", &self.database_name)
            .field("password_scheme", &self.password_scheme)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let password_scheme = match env::var(ENV_PASSWORD_SCHEME) {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to salted SHA-256", e);
                PasswordScheme::default()
            }),
            Err(_) => PasswordScheme::default(),
        };

        Self {
            database_url: non_empty_var(ENV_DATABASE_URL),
            database_name: non_empty_var(ENV_DATABASE_NAME),
            password_scheme,
        }
    }

    /// Connection string and database name, when both are configured.
    pub fn store_target(&self) -> Option<(&str, &str)> {
        match (&self.database_url, &self.database_name) {
            (Some(url), Some(name)) => Some((url.as_str(), name.as_str())),
            _ => None,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
