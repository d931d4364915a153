use std::{str::FromStr, time::Duration};

use crate::errors::AppError;

pub const DEFAULT_PLACES_API_URL: &str = "https://places.googleapis.com/v1";

/// Runtime settings read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub places_api_url: String,
    pub places_api_key: String,
    pub place_ids: Vec<String>,
    pub translate_delay_min: Duration,
    pub translate_delay_max: Duration,
    pub gateway_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            places_api_url: DEFAULT_PLACES_API_URL.to_string(),
            places_api_key: String::new(),
            place_ids: Vec::new(),
            translate_delay_min: Duration::from_millis(500),
            translate_delay_max: Duration::from_millis(1500),
            gateway_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for
    /// unset keys. Set-but-unparseable values are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = parse_or(&lookup, "PORT", defaults.port)?;
        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| split_list(&s))
            .unwrap_or(defaults.allowed_origins);
        let places_api_url = lookup("PLACES_API_URL")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or(defaults.places_api_url);
        let places_api_key = lookup("GOOGLE_MAPS_API_KEY").unwrap_or_default();
        let place_ids = lookup("PLACE_IDS")
            .map(|s| split_list(&s))
            .unwrap_or_default();

        let min_ms = parse_or(&lookup, "TRANSLATE_DELAY_MIN_MS", 500u64)?;
        let max_ms = parse_or(&lookup, "TRANSLATE_DELAY_MAX_MS", 1500u64)?;
        if min_ms > max_ms {
            return Err(AppError::EnvError(format!(
                "TRANSLATE_DELAY_MIN_MS ({min_ms}) must not exceed TRANSLATE_DELAY_MAX_MS ({max_ms})"
            )));
        }

        let timeout_secs = parse_or(&lookup, "GATEWAY_TIMEOUT_SECS", 10u64)?;

        Ok(Self {
            port,
            allowed_origins,
            places_api_url,
            places_api_key,
            place_ids,
            translate_delay_min: Duration::from_millis(min_ms),
            translate_delay_max: Duration::from_millis(max_ms),
            gateway_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| AppError::EnvError(format!("Invalid value for {key}: {raw}"))),
        None => Ok(default),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
