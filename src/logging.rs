//! Console tracing setup.
//!
//! Progress events (dataset generated, variant finished) go to stderr so
//! stdout carries only the summary. `RUST_LOG` overrides the default `info`
//! filter:
//!
//! ```bash
//! RUST_LOG=iterbench=debug cargo run --release -- 100
//! ```

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the console subscriber.
///
/// Safe to call multiple times; only the first call takes effect.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        // try_init: tests may have installed a subscriber already.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init();
    });
}
