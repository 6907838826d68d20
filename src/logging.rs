//! Tracing Setup
//!
//! `RUST_LOG` wins over the configured level. `format = "json"` emits one JSON
//! object per event; anything else uses the human-readable layer.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global subscriber
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Filter directives for a bare level such as `info`
pub fn default_directives(level: &str) -> String {
    format!("loansewa={level},tower_http={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives("debug"), "loansewa=debug,tower_http=debug");
    }

    #[test]
    fn test_directives_parse() {
        assert!(EnvFilter::try_new(default_directives("warn")).is_ok());
    }
}
