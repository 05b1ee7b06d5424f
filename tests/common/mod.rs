//! Shared test harness bits: a one-time tracing subscriber so solver and
//! pipeline `debug`/`warn` spans show up under `RUST_LOG` during a `cargo
//! test -- --nocapture` run instead of going nowhere.

use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
