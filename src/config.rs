//! Environment-driven configuration.

use std::time::Duration;

/// Settings for the remote collaborators and the orchestrator's debounce
/// window.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the recipe API, without trailing slash.
    pub base_url: String,
    /// Per-request HTTP timeout.
    pub http_timeout: Duration,
    /// How long input must stay quiet before a search is dispatched.
    pub debounce: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            http_timeout: Duration::from_secs(10),
            debounce: Duration::from_millis(350),
        }
    }
}

impl RemoteConfig {
    /// Load config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(base) = dotenvy::var("RECETAS_API_BASE") {
            cfg.base_url = base.trim_end_matches('/').to_string();
        }

        if let Ok(val) = dotenvy::var("RECETAS_HTTP_TIMEOUT_MS")
            && let Ok(ms) = val.parse::<u64>()
        {
            cfg.http_timeout = Duration::from_millis(ms);
        }

        if let Ok(val) = dotenvy::var("RECETAS_DEBOUNCE_MS")
            && let Ok(ms) = val.parse::<u64>()
        {
            cfg.debounce = Duration::from_millis(ms);
        }

        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = RemoteConfig::default();
        assert!(!cfg.base_url.ends_with('/'));
        assert_eq!(cfg.debounce, Duration::from_millis(350));
    }
}
