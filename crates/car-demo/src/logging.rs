//! Log subscriber setup
//!
//! Diagnostics always go to stderr so the report on stdout stays exact.

use tracing_subscriber::EnvFilter;

use crate::error::DemoError;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Build the env filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`]
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global stderr subscriber
///
/// # Errors
/// Returns [`DemoError::Logging`] if a global subscriber is already set.
pub fn init() -> Result<(), DemoError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| DemoError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails() {
        // Either this call or another test's installed the subscriber first.
        let _ = init();
        assert!(matches!(init(), Err(DemoError::Logging(_))));
    }
}
