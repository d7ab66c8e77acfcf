use std::path::PathBuf;

use crate::app_config::{AppConfig, SearchFailurePolicy};
use crate::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://maps.googleapis.com";
pub const DEFAULT_OUTPUT_PATH: &str = "kathmandu_emergency_data.csv";
pub const DEFAULT_USER_AGENT: &str = "placegrab/0.1 (places-export)";

/// Load application configuration from the process environment.
///
/// `.env` files are not read here; the binary loads them once at startup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// The `PLACEGRAB_QUERIES_PATH` override from the process environment, if set
/// and non-blank. Used by commands that do not need the full [`AppConfig`].
#[must_use]
pub fn queries_path_from_env() -> Option<PathBuf> {
    queries_path(|key| std::env::var(key))
}

fn queries_path<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    lookup("PLACEGRAB_QUERIES_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can pass a `HashMap`
/// lookup instead of mutating global state.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    // Blank values count as missing so an empty `PLACES_API_KEY=` line in
    // `.env` never reaches the provider as an unauthenticated request.
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Zero would disable the request timeout or the provider's required
    // wait between pages, so both settings must be positive.
    let parse_positive_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(value)
    };

    let places_api_key = require("PLACES_API_KEY")?;

    let api_base_url = or_default("PLACEGRAB_API_BASE_URL", DEFAULT_API_BASE_URL);
    let output_path = PathBuf::from(or_default("PLACEGRAB_OUTPUT_PATH", DEFAULT_OUTPUT_PATH));
    let queries_path = queries_path(&lookup);

    let page_delay_ms = parse_positive_u64("PLACEGRAB_PAGE_DELAY_MS", "2000")?;
    let request_timeout_secs = parse_positive_u64("PLACEGRAB_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PLACEGRAB_USER_AGENT", DEFAULT_USER_AGENT);
    let on_search_error = parse_policy(&or_default("PLACEGRAB_ON_SEARCH_ERROR", "abort"))?;
    let log_level = or_default("PLACEGRAB_LOG_LEVEL", "info");

    Ok(AppConfig {
        places_api_key,
        api_base_url,
        output_path,
        queries_path,
        page_delay_ms,
        request_timeout_secs,
        user_agent,
        on_search_error,
        log_level,
    })
}

fn parse_policy(s: &str) -> Result<SearchFailurePolicy, ConfigError> {
    s.parse::<SearchFailurePolicy>()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "PLACEGRAB_ON_SEARCH_ERROR".to_string(),
            reason,
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
