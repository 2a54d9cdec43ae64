//! Logging setup
//!
//! All components log through `tracing` with a bracketed tag per component
//! (`[GESTURE]`, `[AUTHORITY]`, ...). The binary installs a `fmt` subscriber
//! filtered by `RUST_LOG`, falling back to the level given on the command line.

use crate::core::{CoreError, CoreResult};
use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor a CLI level is given
pub const DEFAULT_LOG_FILTER: &str = "xfboard=info";

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` wins over `fallback`. Calling this twice returns
/// [`CoreError::LoggingInit`] instead of panicking.
pub fn init_logging(fallback: Option<&str>) -> CoreResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback.unwrap_or(DEFAULT_LOG_FILTER)))
        .map_err(|e| CoreError::LoggingInit {
            message: e.to_string(),
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| CoreError::LoggingInit {
            message: e.to_string(),
        })
}
