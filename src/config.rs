/// Client configuration
///
/// The upload endpoint defaults to the local gateway and can be overridden
/// with the `SFG_ENDPOINT` environment variable. The endpoint must be a
/// valid URL before the UI is wired up at all; an unparseable endpoint is
/// fatal at startup.

use reqwest::Url;

/// Default gateway endpoint, matching a locally running SecureFileGuard backend.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/upload/upload";

/// Environment variable that overrides the upload endpoint.
pub const ENDPOINT_ENV: &str = "SFG_ENDPOINT";

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Config { endpoint }
    }

    /// Validate the configured endpoint as a URL.
    pub fn endpoint_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.endpoint)
    }
}
