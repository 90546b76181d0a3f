use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the warehouse backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl BackendConfig {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// `TRADEWIND_BACKEND_URL` and `TRADEWIND_BACKEND_TIMEOUT_SECS`;
    /// unparseable values fall back rather than fail.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url =
            std::env::var("TRADEWIND_BACKEND_URL").unwrap_or(defaults.base_url);
        let timeout = std::env::var("TRADEWIND_BACKEND_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        Self { base_url, timeout }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000/api");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
