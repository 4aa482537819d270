use std::{env, net::SocketAddr};
use thiserror::Error;

use crate::phase::PhaseScheme;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://miriam.db?mode=rwc";
pub const DEFAULT_BIND: &str = "127.0.0.1:3050";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub phase_scheme: PhaseScheme,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MIRIAM_BIND is not a socket address: {0}")]
    Bind(String),
    #[error("MIRIAM_PHASE_SCHEME: {0}")]
    Scheme(String),
}

impl Config {
    /// Reads `DATABASE_URL`, `MIRIAM_BIND` and `MIRIAM_PHASE_SCHEME`, falling
    /// back to a local database on loopback with the fine phase scheme.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let bind = env::var("MIRIAM_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let bind_addr = bind.parse::<SocketAddr>().map_err(|_| ConfigError::Bind(bind))?;

        let phase_scheme = match env::var("MIRIAM_PHASE_SCHEME") {
            Ok(raw) => raw.parse::<PhaseScheme>().map_err(ConfigError::Scheme)?,
            Err(_) => PhaseScheme::default(),
        };

        Ok(Config { database_url, bind_addr, phase_scheme })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(["DATABASE_URL", "MIRIAM_BIND", "MIRIAM_PHASE_SCHEME"], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
            assert_eq!(config.bind_addr, "127.0.0.1:3050".parse().unwrap());
            assert_eq!(config.phase_scheme, PhaseScheme::Fine);
        });
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("sqlite::memory:")),
                ("MIRIAM_BIND", Some("0.0.0.0:8080")),
                ("MIRIAM_PHASE_SCHEME", Some("Coarse")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.database_url, "sqlite::memory:");
                assert_eq!(config.bind_addr.port(), 8080);
                assert_eq!(config.phase_scheme, PhaseScheme::Coarse);
            },
        );
    }

    #[test]
    fn test_bad_values_are_errors() {
        temp_env::with_vars([("MIRIAM_BIND", Some("nowhere")), ("MIRIAM_PHASE_SCHEME", None)], || {
            assert!(matches!(Config::from_env(), Err(ConfigError::Bind(_))));
        });
        temp_env::with_vars([("MIRIAM_BIND", None), ("MIRIAM_PHASE_SCHEME", Some("weekly"))], || {
            assert!(matches!(Config::from_env(), Err(ConfigError::Scheme(_))));
        });
    }
}
