//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = WittyConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_base_url() {
    let mut config = WittyConfig::default();
    config.api.base_url = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.base_url must not be empty"));
}

#[test]
fn catches_base_url_without_scheme() {
    let mut config = WittyConfig::default();
    config.api.base_url = "api.wit.ai".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("must start with http"));
}

#[test]
fn catches_blank_token() {
    let mut config = WittyConfig::default();
    config.api.token = Some(String::new());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.token"));
}

#[test]
fn catches_zero_max_rounds() {
    let mut config = WittyConfig::default();
    config.session.max_rounds = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.max_rounds"));
}

#[test]
fn catches_timeout_out_of_range() {
    let mut config = WittyConfig::default();
    config.api.timeout_secs = 0;
    config.api.connect_timeout_secs = 500;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.timeout_secs"));
    assert!(err.contains("api.connect_timeout_secs"));
}

#[test]
fn catches_reserved_action_name() {
    let mut config = WittyConfig::default();
    config.actions.insert("say".into(), serde_json::Map::new());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("actions.say is reserved"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = WittyConfig::default();
    config.api.version = String::new();
    config.session.max_rounds = 5000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.version"));
    assert!(err.contains("session.max_rounds"));
    assert!(err.contains("; "));
}
