//! Process configuration from the environment (and `.env` when present).

use crate::error::ConfigError;
use std::str::FromStr;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/biztime";
const DEFAULT_LOG_FILTER: &str = "biztime=info,tower_http=info";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// Run `CREATE TABLE IF NOT EXISTS` for the four tables at startup.
    pub init_schema: bool,
    pub body_limit_bytes: usize,
    /// Used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Ok(Self {
            database_url: var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            host: var_or("HOST", "127.0.0.1"),
            port: parse_var("PORT", 3000)?,
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 5)?,
            init_schema: parse_flag("BIZTIME_INIT_SCHEMA", std::env::var("BIZTIME_INIT_SCHEMA").ok(), true)?,
            body_limit_bytes: parse_var("BODY_LIMIT_BYTES", 1024 * 1024)?,
            log_filter: var_or("RUST_LOG", DEFAULT_LOG_FILTER),
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        Err(_) => Ok(default),
    }
}

fn parse_flag(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_flag;

    #[test]
    fn flag_defaults_when_unset() {
        assert!(parse_flag("X", None, true).unwrap());
        assert!(!parse_flag("X", None, false).unwrap());
    }

    #[test]
    fn flag_accepts_common_spellings() {
        assert!(parse_flag("X", Some("Yes".into()), false).unwrap());
        assert!(!parse_flag("X", Some(" off ".into()), true).unwrap());
    }

    #[test]
    fn flag_rejects_garbage() {
        let err = parse_flag("BIZTIME_INIT_SCHEMA", Some("maybe".into()), true).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for BIZTIME_INIT_SCHEMA: 'maybe'");
    }
}
