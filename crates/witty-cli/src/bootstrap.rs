//! Wiring config and flags into a ready-to-run session.

use std::sync::Arc;
use std::time::Duration;

use witty_config::schema::{ActionsConfig, ApiConfig, LogLevel};
use witty_config::WittyConfig;
use witty_converse::{
    ActionRegistry, ActionRegistryBuilder, ContextStore, ConversationSession, HttpTransport,
    Say, StaticSlots, TransportConfig, TransportError,
};
use witty_converse::transport::TOKEN_ENV;

use crate::cli::Args;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("no access token: pass --token, set WIT_ACCESS_TOKEN, or set [api] token in the config")]
    MissingToken,
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Default filter when neither `--log-level` nor `RUST_LOG` is given.
pub fn default_log_directive(level: LogLevel) -> String {
    format!("witty={}", level.as_filter())
}

/// First non-blank token of: flag, environment, config.
pub fn resolve_token(
    flag: Option<&str>,
    env: Option<&str>,
    config: Option<&str>,
) -> Option<String> {
    [flag, env, config]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|token| !token.is_empty())
        .map(String::from)
}

pub fn transport_config(token: String, api: &ApiConfig) -> TransportConfig {
    TransportConfig::new(token)
        .with_base_url(api.base_url.clone())
        .with_version(api.version.clone())
        .with_timeout(Duration::from_secs(u64::from(api.timeout_secs)))
        .with_connect_timeout(Duration::from_secs(u64::from(api.connect_timeout_secs)))
}

/// `say` on stdout plus one static-slot action per `[actions.<name>]` table.
pub fn registry_builder(actions: &ActionsConfig) -> ActionRegistryBuilder {
    actions.iter().fold(
        ActionRegistry::builder().register("say", Say::stdout()),
        |builder, (name, slots)| builder.register(name.clone(), StaticSlots::new(slots.clone())),
    )
}

pub fn build_session(args: &Args, config: &WittyConfig) -> Result<ConversationSession, BootstrapError> {
    let env_token = std::env::var(TOKEN_ENV).ok();
    let token = resolve_token(
        args.token.as_deref(),
        env_token.as_deref(),
        config.api.token.as_deref(),
    )
    .ok_or(BootstrapError::MissingToken)?;

    let endpoint = transport_config(token, &config.api).with_env_overrides();
    tracing::debug!(config = ?endpoint, "Transport configured");
    let transport = HttpTransport::new(endpoint)?;
    let registry = registry_builder(&config.actions).build();
    tracing::info!(actions = ?registry.names(), "Actions registered");

    let max_rounds = args.max_rounds.unwrap_or(config.session.max_rounds);
    let session = ConversationSession::new(
        Arc::new(transport),
        ContextStore::new().shared(),
        Arc::new(registry),
    )
    .with_max_rounds(max_rounds);

    tracing::info!(session = %session.id(), max_rounds, "Session ready");
    Ok(session)
}
