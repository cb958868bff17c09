//! Tracing setup
//!
//! Installs the global subscriber used by services in this crate. Binaries
//! embedding the core call `init` once at startup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Install a fmt subscriber filtered by `config.log_filter`. Returns
/// `false` if a global subscriber was already set.
pub fn init(config: &Config) -> bool {
    let filter = build_filter(config);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(filter = %config.log_filter, "Tracing initialized");
    }
    installed
}

/// Filter directives come from `Config` alone; `RUST_LOG` is read there.
fn build_filter(config: &Config) -> EnvFilter {
    EnvFilter::new(&config.log_filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_does_not_panic() {
        let config = Config::default();
        let _ = init(&config);
        assert!(!init(&config));
    }

    #[test]
    fn filter_comes_from_config() {
        let config = Config {
            log_filter: "warn,courses_core=trace".to_string(),
            ..Config::default()
        };
        let rendered = build_filter(&config).to_string();
        assert!(rendered.contains("courses_core=trace"));
        assert!(rendered.contains("warn"));
    }
}
