//! Process settings from environment variables (optionally seeded from `.env`).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.db?mode=rwc";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
}

impl Settings {
    /// Load `.env` if present, then read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Unset or blank keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.into())
            .parse()
            .map_err(|e| ConfigError::Invalid {
                var: "BIND_ADDR",
                reason: format!("{}", e),
            })?;
        let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(v) => parse_positive("DATABASE_MAX_CONNECTIONS", &v)?,
        };
        let body_limit = match get("REQUEST_BODY_LIMIT") {
            None => DEFAULT_BODY_LIMIT,
            Some(v) => parse_positive("REQUEST_BODY_LIMIT", &v)?,
        };

        Ok(Settings {
            database_url,
            bind_addr,
            max_connections,
            body_limit,
        })
    }
}

fn parse_positive<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match raw.parse::<T>() {
        Ok(n) if n > T::default() => Ok(n),
        _ => Err(ConfigError::Invalid {
            var,
            reason: format!("expected a positive integer, got '{}'", raw),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(s.bind_addr, "0.0.0.0:8000".parse().unwrap());
        assert_eq!(s.max_connections, 10);
        assert_eq!(s.body_limit, 64 * 1024);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let s = settings(&[("DATABASE_URL", "  "), ("DATABASE_MAX_CONNECTIONS", "")]).unwrap();
        assert_eq!(s.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(s.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn overrides_are_read() {
        let s = settings(&[
            ("DATABASE_URL", "postgres://app@localhost/heroes"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("DATABASE_MAX_CONNECTIONS", "3"),
        ])
        .unwrap();
        assert_eq!(s.database_url, "postgres://app@localhost/heroes");
        assert_eq!(s.bind_addr.port(), 9000);
        assert_eq!(s.max_connections, 3);
    }

    #[test]
    fn rejects_zero_and_garbage() {
        let err = settings(&[("DATABASE_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(err.to_string().starts_with("DATABASE_MAX_CONNECTIONS"));
        assert!(settings(&[("REQUEST_BODY_LIMIT", "lots")]).is_err());
        assert!(settings(&[("BIND_ADDR", "nowhere")]).is_err());
    }
}
