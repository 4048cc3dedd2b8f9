use std::path::PathBuf;

use clap::Parser;

/// witty: talk to a Wit.ai style converse bot from the terminal.
#[derive(Parser, Debug)]
#[command(name = "witty", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `witty_converse=trace`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Access token. Takes precedence over WIT_ACCESS_TOKEN and the config file.
    #[arg(long)]
    pub token: Option<String>,

    /// Maximum converse rounds per user message.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_rounds: Option<u32>,
}

pub fn parse() -> Args {
    Args::parse()
}
