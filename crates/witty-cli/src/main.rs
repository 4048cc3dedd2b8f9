//! witty: console client for a Wit.ai style converse bot.
//!
//! Reads a line, sends it to `/converse`, and keeps following up until the
//! bot says `stop`. Bot messages are printed as `Bot: ...`.

mod bootstrap;
mod cli;

use tracing_subscriber::EnvFilter;
use witty_config::WittyConfig;
use witty_converse::Interaction;

fn init_logging(flag: Option<&str>, config: &WittyConfig) {
    let fallback = bootstrap::default_log_directive(config.logging.level);
    let filter = match flag {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(&fallback)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&fallback)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Logging needs the configured level, so config errors are reported after init.
    let (config, load_error) = match witty_config::load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (WittyConfig::default(), Some(e)),
    };
    init_logging(args.log_level.as_deref(), &config);

    if let Some(e) = load_error {
        tracing::error!(error = %e, "Failed to load config");
        std::process::exit(1);
    }
    tracing::info!(base_url = %config.api.base_url, version = %config.api.version, "Config loaded");

    let mut session = match bootstrap::build_session(&args, &config) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start");
            std::process::exit(1);
        }
    };

    match Interaction::console().run(&mut session).await {
        Ok(turns) => tracing::info!(turns, "Goodbye"),
        Err(e) => {
            tracing::error!(error = %e, session = %session.id(), "Conversation failed");
            std::process::exit(1);
        }
    }
}
