use std::env;
use std::path::PathBuf;

use db_infra::db::DbKind;

use crate::error::AppError;

/// Minimum length `actix_web::cookie::Key` accepts for signing keys.
pub const MIN_SESSION_KEY_LEN: usize = 64;

/// Process-level settings read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Debug runs skip the error log file.
    pub debug: bool,
    /// Mark the session cookie `Secure`. Only set this behind TLS, since
    /// browsers drop secure cookies sent over plain http.
    pub secure_cookies: bool,
    /// Cookie signing key; a random one is generated when absent.
    pub session_key: Option<Vec<u8>>,
    pub error_log_path: PathBuf,
    pub db_kind: DbKind,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`AppConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SHOWBOOK_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("SHOWBOOK_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("SHOWBOOK_PORT must be a valid port number, got '{raw}'"))
            })?,
            None => 5000,
        };

        let debug = lookup("SHOWBOOK_DEBUG")
            .map(|raw| parse_bool(&raw))
            .unwrap_or(false);

        let secure_cookies = lookup("SHOWBOOK_SECURE_COOKIES")
            .map(|raw| parse_bool(&raw))
            .unwrap_or(false);

        let session_key = match lookup("SHOWBOOK_SESSION_KEY") {
            Some(key) if key.len() < MIN_SESSION_KEY_LEN => {
                return Err(AppError::config(format!(
                    "SHOWBOOK_SESSION_KEY must be at least {MIN_SESSION_KEY_LEN} bytes"
                )));
            }
            Some(key) => Some(key.into_bytes()),
            None => None,
        };

        let error_log_path = lookup("SHOWBOOK_ERROR_LOG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("error.log"));

        let db_kind = match lookup("SHOWBOOK_DB") {
            Some(raw) => raw.parse::<DbKind>()?,
            None => DbKind::Postgres,
        };

        Ok(Self {
            host,
            port,
            debug,
            secure_cookies,
            session_key,
            error_log_path,
            db_kind,
        })
    }
}

fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
