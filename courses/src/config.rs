use std::env;

use crate::domain::entities::CoverImagePolicy;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info,courses_core=debug";

#[derive(Debug, Clone)]
pub struct Config {
    /// Tracing filter directives
    pub log_filter: String,
    /// Limits applied to uploaded session covers
    pub cover_image: CoverImagePolicy,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparsable numbers fall back to
    /// the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CoverImagePolicy::default();

        Self {
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            cover_image: CoverImagePolicy {
                max_bytes: lookup("COVER_IMAGE_MAX_BYTES")
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(defaults.max_bytes),
                min_width: lookup("COVER_IMAGE_MIN_WIDTH")
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(defaults.min_width),
                min_height: lookup("COVER_IMAGE_MIN_HEIGHT")
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(defaults.min_height),
                ratio: defaults.ratio,
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
