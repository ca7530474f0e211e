//! Process initialization utilities
//!
//! Standardized tracing setup shared by both transport binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging for a spacecheck binary.
///
/// Logs go to stderr (stdout is reserved for the framed protocol in
/// the native messaging host) with:
/// - Environment-based filtering via RUST_LOG
/// - Default log level of `info` for the named crate
///
/// Set `LOG_FORMAT=json` for structured JSON output; default is
/// human-readable text without ANSI colors.
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let directive = format!("{}=info", crate_name);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}
