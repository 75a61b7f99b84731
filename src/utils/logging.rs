// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber for the extraction CLI: compact
/// single-line output without module targets, filtered by `RUST_LOG`.
pub fn setup_logging() {
    fmt()
        .compact()
        .with_target(false)
        .with_env_filter(resolve_filter())
        .init();

    tracing::debug!("Logging setup complete.");
}

/// `RUST_LOG` when set and parseable, otherwise "info".
fn resolve_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults_to_info_when_rust_log_is_unset() {
        std::env::remove_var("RUST_LOG");
        assert_eq!(resolve_filter().to_string(), "info");
    }
}
