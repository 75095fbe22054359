//! Logging setup for the command-line frontend.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr.
///
/// The filter comes from the `RUST_LOG` environment variable when set,
/// otherwise from the provided level applied to this binary with the engine
/// crate kept at `warn`.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let default_filter = format!("pathsim={level},pathsim_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    Ok(())
}
