use std::collections::HashMap;
use std::env::VarError;

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

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "HALALFINDER_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert!(cfg.sheet_url.is_none());
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.sheet_timeout_secs, 15);
    assert_eq!(cfg.user_agent, "halalfinder/0.1 (sheet-sync)");
    assert_eq!(cfg.cache_max_age_secs, 300);
    assert_eq!(cfg.rate_limit_per_minute, 120);
}

#[test]
fn build_app_config_reads_sheet_url() {
    let mut map = HashMap::new();
    map.insert(
        "GOOGLE_SHEET_URL",
        "https://docs.google.com/spreadsheets/d/abc123/edit",
    );
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.sheet_url(),
        Some("https://docs.google.com/spreadsheets/d/abc123/edit")
    );
}

#[test]
fn build_app_config_blank_sheet_url_is_absent() {
    let mut map = HashMap::new();
    map.insert("GOOGLE_SHEET_URL", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.sheet_url.is_none());
}

#[test]
fn build_app_config_trims_sheet_url() {
    let mut map = HashMap::new();
    map.insert("GOOGLE_SHEET_URL", "  https://example.com/sheet  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.sheet_url(), Some("https://example.com/sheet"));
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("HALALFINDER_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HALALFINDER_BIND_ADDR"),
        "expected InvalidEnvVar(HALALFINDER_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_env() {
    let mut map = HashMap::new();
    map.insert("HALALFINDER_ENV", "qa");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HALALFINDER_ENV"),
        "expected InvalidEnvVar(HALALFINDER_ENV), got: {result:?}"
    );
}

#[test]
fn sheet_timeout_override() {
    let mut map = HashMap::new();
    map.insert("HALALFINDER_SHEET_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.sheet_timeout_secs, 5);
}

#[test]
fn sheet_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("HALALFINDER_SHEET_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HALALFINDER_SHEET_TIMEOUT_SECS"),
        "expected InvalidEnvVar(HALALFINDER_SHEET_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn sheet_timeout_zero_rejected() {
    let mut map = HashMap::new();
    map.insert("HALALFINDER_SHEET_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(
        result,
        Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HALALFINDER_SHEET_TIMEOUT_SECS"
    ));
}

#[test]
fn user_agent_override() {
    let mut map = HashMap::new();
    map.insert("HALALFINDER_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}

#[test]
fn cache_max_age_override() {
    let mut map = HashMap::new();
    map.insert("HALALFINDER_CACHE_MAX_AGE_SECS", "60");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.cache_max_age_secs, 60);
}

#[test]
fn rate_limit_invalid() {
    let mut map = HashMap::new();
    map.insert("HALALFINDER_RATE_LIMIT_PER_MINUTE", "-3");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HALALFINDER_RATE_LIMIT_PER_MINUTE"),
        "expected InvalidEnvVar(HALALFINDER_RATE_LIMIT_PER_MINUTE), got: {result:?}"
    );
}

#[test]
fn blank_values_use_defaults() {
    let mut map = HashMap::new();
    map.insert("HALALFINDER_BIND_ADDR", "");
    map.insert("HALALFINDER_ENV", "  ");
    map.insert("HALALFINDER_SHEET_TIMEOUT_SECS", "");
    map.insert("HALALFINDER_LOG_LEVEL", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.bind_addr, "0.0.0.0:3000".parse().unwrap());
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.sheet_timeout_secs, 15);
    assert_eq!(cfg.log_level, "info");
}
