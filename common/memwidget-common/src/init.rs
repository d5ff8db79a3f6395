//! Tracing initialization
//!
//! Logs go to stderr so stdout stays reserved for widget output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map a `-v` count to a log level (0 = warn, 1 = info, 2 = debug, 3+ = trace)
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing/logging
///
/// Sets up logging to stderr with:
/// - Environment-based filtering via RUST_LOG
/// - A default level for the workspace crates derived from `verbosity`
///
/// Set `LOG_FORMAT=json` for structured JSON output.
/// Default is human-readable text output.
///
/// # Arguments
///
/// * `crate_name` - The binary crate name (e.g., "memwidget")
/// * `verbosity` - Number of `-v` flags given on the command line
pub fn init_tracing(crate_name: &str, verbosity: u8) -> anyhow::Result<()> {
    let level = level_for_verbosity(verbosity);
    let mut filter = EnvFilter::from_default_env()
        .add_directive(format!("{}={}", crate_name, level).parse()?);
    for dep in ["vmstat_sampler", "memwidget_common"] {
        filter = filter.add_directive(format!("{}={}", dep, level).parse()?);
    }

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
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
