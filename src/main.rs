use anyhow::Result;
use portuguese_helper_bot::{
    bot,
    config::{self, LogFormat},
    grammar::{Profile, TextProcessor},
    llm::OpenAiClient,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the variables may come from the environment.
    dotenvy::dotenv().ok();

    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let log_level = config.logs.effective_level().to_string();

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // RUST_LOG overrides the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    match config.logs.format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }

    info!(
        "Starting Portuguese Helper Bot with log level: {}",
        log_level
    );
    info!("Using model {}", config.llm.model);

    let client = OpenAiClient::new(&config.llm)?;
    let processor = Arc::new(TextProcessor::new(
        Arc::new(client),
        Profile::european_portuguese_for_russian(),
    ));
    info!("Using prompt profile {}", processor.profile().name);

    bot::run(&config.telegram, processor).await?;

    Ok(())
}
