// Console logging for the exceller binary
//
// Library crates log through the `log` facade; `tracing_log::LogTracer`
// forwards those records into the tracing subscriber installed here.

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Level used when `RUST_LOG` is not set
pub fn default_level(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

fn build_env_filter(verbose: u8, quiet: bool) -> anyhow::Result<EnvFilter> {
    let directives = match std::env::var("RUST_LOG") {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default_level(verbose, quiet).to_string(),
    };
    EnvFilter::try_new(&directives)
        .map_err(|e| anyhow::anyhow!("Invalid tracing filter '{}': {}", directives, e))
}

/// Install a message-only stderr logger
pub fn init_logging(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    tracing_log::LogTracer::init().ok();

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .without_time()
        .with_filter(build_env_filter(verbose, quiet)?);

    let subscriber = tracing_subscriber::registry().with(console_layer);
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install the log subscriber")?;
    Ok(())
}
