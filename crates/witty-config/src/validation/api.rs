//! Validation for the `[api]` and `[session]` sections.

use crate::schema::WittyConfig;

use super::helpers::{validate_not_blank, validate_range};

/// Validate endpoint, version and timeouts.
pub(crate) fn validate_api(errors: &mut Vec<String>, config: &WittyConfig) {
    let api = &config.api;

    validate_not_blank(errors, "api.base_url", &api.base_url);
    if !api.base_url.trim().is_empty()
        && !(api.base_url.starts_with("http://") || api.base_url.starts_with("https://"))
    {
        errors.push(format!(
            "api.base_url = {:?} must start with http:// or https://",
            api.base_url
        ));
    }
    validate_not_blank(errors, "api.version", &api.version);
    if let Some(token) = &api.token {
        validate_not_blank(errors, "api.token", token);
    }
    validate_range(errors, "api.timeout_secs", api.timeout_secs, 1, 600);
    validate_range(
        errors,
        "api.connect_timeout_secs",
        api.connect_timeout_secs,
        1,
        120,
    );
}

/// Validate session limits.
pub(crate) fn validate_session(errors: &mut Vec<String>, config: &WittyConfig) {
    validate_range(
        errors,
        "session.max_rounds",
        config.session.max_rounds,
        1,
        1000,
    );
}
