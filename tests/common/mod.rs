//! Shared test harness.

/// Install a fmt subscriber so dispatch and transport decisions show up
/// under `RUST_LOG`. Safe to call from every test; only the first call in
/// a test binary installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
