use anyhow::{Context, Result, anyhow};
use std::{path::PathBuf, time::Duration};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const MAX_SESSION_RETENTION_DAYS: i64 = 3650;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub production: bool,
    pub cookie_store_path: Option<PathBuf>,
    pub session_retention_days: i64,
    pub scroll_units_per_index: f64,
    pub request_timeout: Duration,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `init` reads the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(anyhow!(
                "API_BASE_URL must be an http(s) URL, got '{}'",
                api_base_url
            ));
        }

        let production = lookup("APP_ENV").is_some_and(|v| v == "production");

        let cookie_store_path = lookup("COOKIE_STORE_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let session_retention_days = lookup("SESSION_RETENTION_DAYS")
            .unwrap_or_else(|| "7".to_string())
            .parse::<i64>()
            .context("SESSION_RETENTION_DAYS must be a valid integer")?;

        if !(1..=MAX_SESSION_RETENTION_DAYS).contains(&session_retention_days) {
            return Err(anyhow!(
                "SESSION_RETENTION_DAYS must be between 1 and {}, got {}",
                MAX_SESSION_RETENTION_DAYS,
                session_retention_days
            ));
        }

        let scroll_units_per_index = lookup("SCROLL_UNITS_PER_INDEX")
            .unwrap_or_else(|| "1000".to_string())
            .parse::<f64>()
            .context("SCROLL_UNITS_PER_INDEX must be a number")?;

        if !(scroll_units_per_index.is_finite() && scroll_units_per_index > 0.0) {
            return Err(anyhow!(
                "SCROLL_UNITS_PER_INDEX must be positive, got {}",
                scroll_units_per_index
            ));
        }

        let request_timeout_secs = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "15".to_string())
            .parse::<u64>()
            .context("REQUEST_TIMEOUT_SECS must be a valid u64 integer")?;

        Ok(Self {
            api_base_url,
            production,
            cookie_store_path,
            session_retention_days,
            scroll_units_per_index,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}
