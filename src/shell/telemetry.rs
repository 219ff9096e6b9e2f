// Tracing subscriber installation for test runs.
//
// Responsibilities
// - Install a fmt subscriber filtered by RUST_LOG, writing through the test harness.
// - Tolerate being called from every test; only the first call installs anything.

use tracing_subscriber::{EnvFilter, fmt};

pub const DEFAULT_FILTER: &str = "entity_projection=info";

pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .ok();
}
