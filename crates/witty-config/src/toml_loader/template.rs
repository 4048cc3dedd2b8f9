//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# witty configuration
# Only override what you want to change -- missing fields use defaults.

[api]
# base_url = "https://api.wit.ai"
# version = "20160526"
# token = ""               # prefer the WIT_ACCESS_TOKEN environment variable
# timeout_secs = 30        # 1-600
# connect_timeout_secs = 10  # 1-120

[session]
# max_rounds = 20          # 1-1000, rounds allowed before a turn is aborted

[logging]
# level = "INFO"           # DEBUG, INFO, WARNING, ERROR

# Each [actions.<name>] table declares an action that writes its keys into
# the conversation context when the bot requests it. "say" is built in.
#
# [actions.fetchForecast]
# forecastResult = "sunny"
"##
}
