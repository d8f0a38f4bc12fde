use std::env;
use std::time::Duration;

/// Public demo instance of the petstore service.
pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the contract runner
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the user API under test
    pub base_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Whether debug logging was requested via the environment
    pub debug: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let base_url = Self::get_base_url();
        let request_timeout = Self::get_request_timeout();
        let debug = Self::get_debug();
        tracing::info!("Contract base URL: {}", base_url);
        tracing::info!("Request timeout: {}s", request_timeout.as_secs());
        Self {
            base_url,
            request_timeout,
            debug,
        }
    }

    /// Create a config pointed at an explicit base URL (useful for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            debug: false,
        }
    }

    /// Get the base URL from environment or use the public demo instance
    fn get_base_url() -> String {
        env::var("PETSTORE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
    }

    /// Get the request timeout from environment or use the default
    fn get_request_timeout() -> Duration {
        env::var("PETSTORE_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    fn get_debug() -> bool {
        env::var("PETSTORE_DEBUG")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.debug
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
