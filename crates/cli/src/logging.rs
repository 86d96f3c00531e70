//! Stderr logging for the CLI.
//!
//! stdout carries only the rendered Markdown.

use boj2md_core::LogFormat;
use tracing_subscriber::EnvFilter;

/// Initialize tracing from `RUST_LOG` (default `warn`) in the configured format.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.compact().try_init(),
    };
}
