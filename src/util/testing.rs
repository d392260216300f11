//! Test logging bootstrap

use std::sync::Once;

use tracing::info;
use tracing_subscriber::EnvFilter;

static TEST_SETUP: Once = Once::new();

/// Install an env-filtered tracing subscriber once per test process.
///
/// `RUST_LOG` controls the level, defaulting to `debug`. Safe to call from
/// every test; later calls are no-ops.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init()
            .ok();
        info!("test setup complete");
    });
}
