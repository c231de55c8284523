//! Log setup for the documentation server.
//!
//! The engine logs document loads and fallbacks at `info`/`warn`, and section splitting and
//! per-query search timings at `debug`. Set `USERDOC_LOG` (or `RUST_LOG`) to a filter such as
//! `userdoc=debug` to see the latter.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Environment variable holding the log filter. Takes precedence over `RUST_LOG`.
pub const LOG_ENV: &str = "USERDOC_LOG";

static INIT: Once = Once::new();

/// Filter used when neither environment variable is set. The MCP transport is kept quiet.
fn default_directives(level: tracing::Level) -> String {
    format!(
        "{}={},rmcp=warn",
        env!("CARGO_CRATE_NAME"),
        level.as_str().to_ascii_lowercase()
    )
}

fn filter(level: tracing::Level) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

/// Install the global subscriber. Safe to call more than once.
///
/// Output always goes to stderr: stdout carries the MCP protocol.
pub fn init() {
    INIT.call_once(|| {
        let is_test =
            std::env::var("NEXTEST").is_ok() || std::env::var("CARGO_TARGET_TMPDIR").is_ok();
        let level = if is_test {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter(level))
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
            .compact();

        if is_test {
            // Another test harness may already own the global subscriber.
            let _ = builder.with_test_writer().try_init();
        } else if let Err(e) = builder.with_writer(std::io::stderr).try_init() {
            eprintln!("Failed to initialize logging: {}", e);
        }
    });
}
