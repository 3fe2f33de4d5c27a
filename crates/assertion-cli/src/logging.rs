//! Log output for `xpath-assert`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Send assertion log events to stderr so stdout carries only the result.
///
/// Verbosity comes from `RUST_LOG` and falls back to `warn`, which keeps
/// parse errors from the XPath assertion visible. Use
/// `RUST_LOG=xpath_assertion=debug` to see every evaluation.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .init();
}
