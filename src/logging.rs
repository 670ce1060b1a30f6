//! Logging initialization and configuration.
//!
//! Logs go to stderr; stdout is reserved for normalized output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor an explicit level is given.
pub const DEFAULT_FILTER: &str = "sanity_filter=warn";

/// Initialize the logging system.
///
/// Uses the `RUST_LOG` environment variable for filtering. If not set,
/// defaults to [`DEFAULT_FILTER`].
///
/// # Panics
///
/// Panics if called more than once, or if another tracing subscriber
/// has already been set.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer())
        .init();
}

/// Try to initialize the logging system.
///
/// Returns `Ok(())` if successful, or `Err` if logging has already been
/// initialized.
pub fn try_init() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer())
        .try_init()
}

/// Initialize logging with an explicit level or filter directive.
///
/// A bare level such as `debug` applies to this crate only; anything else
/// is handed to [`EnvFilter`] as a directive string. An unparseable value
/// falls back to [`DEFAULT_FILTER`].
pub fn init_with_level(level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(filter_for(level))
        .with(stderr_layer())
        .try_init()
}

fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(directive_for(level)).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn directive_for(level: &str) -> String {
    let level = level.trim();
    let lower = level.to_ascii_lowercase();
    match lower.as_str() {
        "error" | "warn" | "info" | "debug" | "trace" | "off" => format!("sanity_filter={lower}"),
        _ => level.to_string(),
    }
}

fn stderr_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a> + 'static,
{
    tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_init_idempotent() {
        // First call may or may not succeed depending on test order
        let _ = try_init();
        let _ = try_init();
    }

    #[test]
    fn test_init_with_level_after_init() {
        let _ = try_init();
        // Already initialized by now, so this reports an error instead of panicking.
        assert!(init_with_level("debug").is_err());
    }

    #[test]
    fn test_directive_for_bare_level() {
        assert_eq!(directive_for("DEBUG"), "sanity_filter=debug");
        assert_eq!(directive_for(" warn "), "sanity_filter=warn");
    }

    #[test]
    fn test_directive_for_passthrough() {
        assert_eq!(directive_for("regex=info,sanity_filter=trace"), "regex=info,sanity_filter=trace");
    }

    #[test]
    fn test_logging_works() {
        let _ = try_init();

        tracing::info!("test info message");
        tracing::debug!("test debug message");
        tracing::warn!("test warn message");
    }
}
