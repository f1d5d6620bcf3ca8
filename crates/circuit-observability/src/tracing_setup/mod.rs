//! Tracing setup: env-filtered subscriber writing to stderr.

pub mod spans;

use std::sync::Once;

use circuit_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "CIRCUIT_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// Filter directives come from `CIRCUIT_LOG`, falling back to the
/// configured level. Output goes to stderr so it never interleaves with
/// dialogue output. Only the first call has an effect.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr);

        // Another subscriber may already be installed by an embedding host.
        let _ = if config.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}
