//! Log subscriber setup.
//!
//! Logs go to stderr so a report written to stdout (`--output -`) stays
//! clean. `RUST_LOG` wins over the configured level when it is set.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_ascii_lowercase()));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = installed {
        debug!(error = %e, "Tracing subscriber already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing("info");
        init_tracing("debug");
        tracing::info!("still logging after a second init");
    }
}
