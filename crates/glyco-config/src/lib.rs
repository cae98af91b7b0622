//! Service configuration for glyco, read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `GLYCO_BIND_ADDR` | `0.0.0.0:8000` |
//! | `GLYCO_MODEL_PATH` | `models/diabetes_pipeline.json` |

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Serialize;

pub const BIND_ADDR_VAR: &str = "GLYCO_BIND_ADDR";
pub const MODEL_PATH_VAR: &str = "GLYCO_MODEL_PATH";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MODEL_PATH: &str = "models/diabetes_pipeline.json";

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {var}: '{value}' is not a socket address")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

// ─────────────────────────────────────────────────────────────────────────────
// Service Config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    /// Location of the classification artifact.
    pub model_path: PathBuf,
}

impl ServiceConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr.trim().parse().map_err(|_| ConfigError::InvalidAddr {
            var: BIND_ADDR_VAR,
            value: addr.clone(),
        })?;

        let model_path = match lookup(MODEL_PATH_VAR) {
            Some(p) if p.trim().is_empty() => return Err(ConfigError::Empty(MODEL_PATH_VAR)),
            Some(p) => PathBuf::from(p.trim()),
            None => PathBuf::from(DEFAULT_MODEL_PATH),
        };

        Ok(Self { bind_addr, model_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
    }

    #[test]
    fn test_overrides() {
        let config = ServiceConfig::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "127.0.0.1:9100"),
            (MODEL_PATH_VAR, " /srv/models/final_model.json "),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 9100);
        assert_eq!(config.model_path, PathBuf::from("/srv/models/final_model.json"));
    }

    #[test]
    fn test_invalid_addr() {
        let err = ServiceConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { .. }));
        assert!(err.to_string().contains("localhost"));
    }

    #[test]
    fn test_empty_model_path() {
        let err = ServiceConfig::from_lookup(lookup(&[(MODEL_PATH_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Empty(MODEL_PATH_VAR)));
    }
}
