use anyhow::{Context, Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global tracing subscriber. `RUST_LOG` wins when set;
/// otherwise the configured level applies crate-wide with sqlx statement
/// logging dialed down to warnings.
pub(crate) fn init_logging(default_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("{default_level},sqlx::query=warn"))
            .with_context(|| format!("invalid log level: {default_level}"))?,
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|err| anyhow!("failed to install the tracing subscriber: {err}"))?;

    Ok(())
}
