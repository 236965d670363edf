use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to `certeq.log` in the working directory.
///
/// The chart owns the terminal while it is up, so log output goes to a file
/// rather than stderr. The level can be overridden with the `RUST_LOG`
/// environment variable.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("certeq.log")?;

    let default_filter = format!("certeq={level},certeq_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!("logging initialized");
    Ok(())
}
