//! Client configuration loaded from environment variables.

/// Storefront client configuration.
///
/// All fields have defaults suitable for local development; override via
/// environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the catalog API (default: `http://localhost:3000/api/v1`).
    pub base_url: String,
    /// Transport-level request timeout in seconds (default: `30`).
    ///
    /// The only timeout anywhere in the fetch path; there is no
    /// application-level cancellation.
    pub timeout_secs: u64,
}

/// Default catalog API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1";

/// Default transport timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                         |
    /// |------------------------|---------------------------------|
    /// | `AYUMART_API_URL`      | `http://localhost:3000/api/v1`  |
    /// | `AYUMART_TIMEOUT_SECS` | `30`                            |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("AYUMART_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let timeout_secs: u64 = std::env::var("AYUMART_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout_secs,
        }
    }

    /// Build a config pointing at an explicit base URL, keeping the
    /// default timeout. Used by tests and the CLI.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
