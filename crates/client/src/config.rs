//! Client configuration loaded from environment variables.

/// Connection settings for the admin backend.
///
/// All fields have defaults suitable for local development; override via
/// environment variables in other deployments.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST API, without a trailing slash
    /// (default: `http://localhost:8080/api/v1`).
    pub base_url: String,
    /// Request timeout in seconds (default: `30`).
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Build a config pointing at the given base URL with default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout_secs: 30,
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                        |
    /// |--------------------|--------------------------------|
    /// | `API_BASE_URL`     | `http://localhost:8080/api/v1` |
    /// | `API_TIMEOUT_SECS` | `30`                           |
    ///
    /// Reads a `.env` file first when one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api/v1".into());

        let timeout_secs: u64 = std::env::var("API_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("API_TIMEOUT_SECS must be a valid u64");

        let mut config = Self::new(base_url);
        config.timeout_secs = timeout_secs;
        config
    }
}
