mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the YAML file at `$CONFIG_PATH` (default `config.yaml`) if it
/// exists, applies environment overrides and validates the result.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let yaml = read_yaml(explicit_path.as_deref()).await?;

    from_sources(yaml.as_deref(), |key| env::var(key).ok())
}

/// Reads the configuration file. The default path may be absent; a path
/// named explicitly must exist.
pub async fn read_yaml(explicit_path: Option<&str>) -> Result<Option<String>> {
    let config_path = explicit_path.unwrap_or(DEFAULT_CONFIG_PATH);

    debug!("Loading configuration from: {}", config_path);

    match tokio::fs::read_to_string(config_path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => match explicit_path {
            Some(path) => Err(Error::config(format!(
                "Configuration file {} (from CONFIG_PATH) does not exist",
                path
            ))),
            None => {
                debug!("No configuration file at {}, using environment only", config_path);
                Ok(None)
            }
        },
        Err(e) => Err(e.into()),
    }
}

/// Builds a validated config from optional YAML text and a variable lookup.
pub fn from_sources<F>(yaml: Option<&str>, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match yaml {
        Some(text) if !text.trim().is_empty() => serde_yaml::from_str(text)?,
        _ => Config::default(),
    };

    apply_env(&mut config, lookup)?;
    config.validate()?;

    Ok(config)
}

fn apply_env<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(token) = var("TELEGRAM_BOT_TOKEN") {
        config.telegram.bot_token = token;
    }
    if let Some(url) = var("TELEGRAM_API_URL") {
        config.telegram.api_url = Some(url);
    }
    if let Some(key) = var("OPENAI_API_KEY") {
        config.llm.api_key = key;
    }
    if let Some(model) = var("OPENAI_MODEL") {
        config.llm.model = model;
    }
    if let Some(url) = var("OPENAI_BASE_URL") {
        config.llm.base_url = url;
    }
    if let Some(secs) = var("OPENAI_TIMEOUT_SECS") {
        config.llm.request_timeout_secs = secs.trim().parse().map_err(|_| {
            Error::config(format!("OPENAI_TIMEOUT_SECS must be a number, got '{}'", secs))
        })?;
    }
    if let Some(flag) = var("BOT_DEBUG") {
        config.logs.debug = flag.trim().eq_ignore_ascii_case("true");
    }
    if let Some(level) = var("LOG_LEVEL") {
        config.logs.level = level;
    }
    if let Some(format) = var("LOG_FORMAT") {
        config.logs.format = match format.trim().to_ascii_lowercase().as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => {
                return Err(Error::config(format!(
                    "LOG_FORMAT must be 'text' or 'json', got '{}'",
                    other
                )));
            }
        };
    }

    Ok(())
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.telegram.bot_token.trim().is_empty() {
            return Err(Error::config(
                "TELEGRAM_BOT_TOKEN environment variable is required",
            ));
        }
        if self.llm.api_key.trim().is_empty() {
            return Err(Error::config("OPENAI_API_KEY environment variable is required"));
        }
        if self.llm.model.trim().is_empty() {
            return Err(Error::config("LLM model cannot be empty"));
        }
        if self.llm.request_timeout_secs == 0 {
            return Err(Error::config("LLM request timeout must be greater than zero"));
        }
        Ok(())
    }
}
