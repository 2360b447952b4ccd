//! Tracing subscriber setup.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

const FALLBACK_FILTER: &str = "warn";

/// Pick the filter directives: `rust_log` when it parses, then
/// `default_filter`, then `warn`.
pub fn filter_from(rust_log: Option<&str>, default_filter: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(default_filter).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_FILTER))
}

/// Install a fmt subscriber filtered by `RUST_LOG`, or by `default_filter`
/// when `RUST_LOG` is unset or invalid. Safe to call more than once; only
/// the first call has an effect, and an already-installed global subscriber
/// is left alone.
pub fn init_logging(default_filter: &str) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = filter_from(rust_log.as_deref(), default_filter);

        let installed = fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();

        if installed {
            tracing::debug!("logging initialised");
        }
    });
}
