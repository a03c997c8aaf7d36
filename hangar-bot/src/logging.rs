use std::path::Path;

use anyhow::Context as _;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
    util::SubscriberInitExt as _,
};

use hangar_core::Settings;

/// Install the global subscriber.
///
/// Console output follows `RUST_LOG` (default `info`). Info-and-above events
/// are appended as JSON to `<log_dir>/info.<date>.log` and errors to
/// `<error_log_dir>/error.<date>.log`, both rotated daily.
pub fn init_logging(settings: &Settings) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let info_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(daily_appender(&settings.log_dir, "info")?)
        .with_filter(LevelFilter::INFO);

    let error_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(daily_appender(&settings.error_log_dir, "error")?)
        .with_filter(LevelFilter::ERROR);

    let console_layer = fmt::layer().with_target(false).with_filter(env_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(info_layer)
        .with(error_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

fn daily_appender(dir: &Path, prefix: &str) -> anyhow::Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .build(dir)
        .with_context(|| format!("failed to open log directory {}", dir.display()))
}
