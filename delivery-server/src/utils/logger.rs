//! Logging Infrastructure
//!
//! Console output always; with a log directory, also daily rolling files:
//! - `<dir>/app/app.YYYY-MM-DD` for everything except security events
//! - `<dir>/security/security.YYYY-MM-DD` for `target: "security"` events
//!
//! `RUST_LOG` wins over the configured level when set.

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const SECURITY_TARGET: &str = "security";

/// Initialize console logging plus optional rolling files under `log_dir`
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: Option<bool>,
    log_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let level = log_level.unwrap_or("info");
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let json = json.unwrap_or(false);

    let console_layer = if json {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer().with_target(false).boxed()
    };

    let file_layers = match log_dir {
        Some(dir) => Some(file_layers(dir, json)?),
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layers)
        .try_init()?;

    Ok(())
}

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

fn file_layers<S>(dir: &Path, json: bool) -> anyhow::Result<Vec<BoxedLayer<S>>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let app_dir = dir.join("app");
    let security_dir = dir.join("security");
    fs::create_dir_all(&app_dir)?;
    fs::create_dir_all(&security_dir)?;

    let app_log = RollingFileAppender::new(Rotation::DAILY, app_dir, "app");
    let security_log = RollingFileAppender::new(Rotation::DAILY, security_dir, SECURITY_TARGET);

    let app_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(app_log));
    let security_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(security_log));

    let app_filter =
        tracing_subscriber::filter::filter_fn(|meta| meta.target() != SECURITY_TARGET);
    let security_filter =
        tracing_subscriber::filter::filter_fn(|meta| meta.target() == SECURITY_TARGET);

    let layers = if json {
        vec![
            app_layer.json().with_filter(app_filter).boxed(),
            security_layer.json().with_filter(security_filter).boxed(),
        ]
    } else {
        vec![
            app_layer.with_filter(app_filter).boxed(),
            security_layer.with_filter(security_filter).boxed(),
        ]
    };
    Ok(layers)
}
