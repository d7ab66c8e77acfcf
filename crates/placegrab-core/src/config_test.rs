use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("PLACES_API_KEY", "test-key");
    m
}

#[test]
fn build_app_config_fails_without_api_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "PLACES_API_KEY"),
        "expected MissingEnvVar(PLACES_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_api_key_as_missing() {
    let mut map = HashMap::new();
    map.insert("PLACES_API_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "PLACES_API_KEY"),
        "expected MissingEnvVar(PLACES_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.places_api_key, "test-key");
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
    assert!(cfg.queries_path.is_none());
    assert_eq!(cfg.page_delay_ms, 2000);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(cfg.on_search_error, SearchFailurePolicy::Abort);
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn page_delay_ms_override() {
    let mut map = full_env();
    map.insert("PLACEGRAB_PAGE_DELAY_MS", "3500");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.page_delay_ms, 3500);
}

#[test]
fn page_delay_ms_invalid() {
    let mut map = full_env();
    map.insert("PLACEGRAB_PAGE_DELAY_MS", "two seconds");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACEGRAB_PAGE_DELAY_MS"),
        "expected InvalidEnvVar(PLACEGRAB_PAGE_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = full_env();
    map.insert("PLACEGRAB_REQUEST_TIMEOUT_SECS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACEGRAB_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(PLACEGRAB_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_zero_is_rejected() {
    let mut map = full_env();
    map.insert("PLACEGRAB_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, ref reason })
                if var == "PLACEGRAB_REQUEST_TIMEOUT_SECS" && reason.contains("greater than zero")
        ),
        "expected InvalidEnvVar(PLACEGRAB_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn page_delay_ms_zero_is_rejected() {
    let mut map = full_env();
    map.insert("PLACEGRAB_PAGE_DELAY_MS", " 0 ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACEGRAB_PAGE_DELAY_MS"),
        "expected InvalidEnvVar(PLACEGRAB_PAGE_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn on_search_error_skip() {
    let mut map = full_env();
    map.insert("PLACEGRAB_ON_SEARCH_ERROR", "Skip");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.on_search_error, SearchFailurePolicy::Skip);
}

#[test]
fn on_search_error_unknown_fails() {
    let mut map = full_env();
    map.insert("PLACEGRAB_ON_SEARCH_ERROR", "retry");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACEGRAB_ON_SEARCH_ERROR"),
        "expected InvalidEnvVar(PLACEGRAB_ON_SEARCH_ERROR), got: {result:?}"
    );
}

#[test]
fn queries_path_and_output_path_overrides() {
    let mut map = full_env();
    map.insert("PLACEGRAB_QUERIES_PATH", "./config/queries.yaml");
    map.insert("PLACEGRAB_OUTPUT_PATH", "/tmp/out.csv");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.queries_path,
        Some(PathBuf::from("./config/queries.yaml"))
    );
    assert_eq!(cfg.output_path, PathBuf::from("/tmp/out.csv"));
}

#[test]
fn blank_queries_path_is_ignored() {
    let mut map = full_env();
    map.insert("PLACEGRAB_QUERIES_PATH", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.queries_path.is_none());
}

#[test]
fn queries_path_reads_the_same_variable_as_app_config() {
    let mut map = HashMap::new();
    map.insert("PLACEGRAB_QUERIES_PATH", "custom/queries.yaml");
    assert_eq!(
        queries_path(lookup_from_map(&map)),
        Some(PathBuf::from("custom/queries.yaml"))
    );

    map.insert("PLACEGRAB_QUERIES_PATH", "  ");
    assert!(queries_path(lookup_from_map(&map)).is_none());
}

#[test]
fn debug_output_redacts_api_key() {
    let mut map = full_env();
    map.insert("PLACES_API_KEY", "super-secret-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret-key"));
    assert!(rendered.contains("[redacted]"));
}
