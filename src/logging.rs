// Author: Dustin Pilgrim
// License: MIT

//! Structured logging to stderr via `tracing`.
//!
//! `YAML_MERGE_LOG` takes `EnvFilter` directives (e.g. `yaml_merge=trace`)
//! and wins over the `-v` count.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "YAML_MERGE_LOG";

/// Default level for a `-v` count: warn, info, debug, then trace.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)))
}

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init_logging(verbosity: u8) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
