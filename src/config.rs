use std::time::Duration;

use serde::Deserialize;

use crate::credential::Credential;

/// Default CLB v2 API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://lb.api.qcloud.com/v2/index.php";

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "gz";

/// Configuration for the CLB client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// CLB API endpoint URL, including scheme and path.
    pub endpoint: String,

    /// Region sent with every request.
    pub region: String,

    /// HTTP request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            region: DEFAULT_REGION.to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with a custom endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the target region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Sets the HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Loosely specified client options, e.g. read from a config file.
///
/// Every key is optional and unknown keys are ignored. Missing credentials
/// default to empty strings and a missing region to [`DEFAULT_REGION`].
///
/// ```
/// use rs_qcloud_clb::ClientOptions;
///
/// let opts = ClientOptions {
///     secret_id: Some("AKIDexample".into()),
///     secret_key: Some("secret".into()),
///     region: None,
/// };
/// let (credential, config) = opts.into_parts();
/// assert_eq!(credential.secret_id, "AKIDexample");
/// assert_eq!(config.region, "gz");
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientOptions {
    pub secret_id: Option<String>,
    pub secret_key: Option<String>,
    pub region: Option<String>,
}

impl ClientOptions {
    /// Splits the options into a credential and a default-based config.
    pub fn into_parts(self) -> (Credential, ClientConfig) {
        let credential = Credential {
            secret_id: self.secret_id.unwrap_or_default(),
            secret_key: self.secret_key.unwrap_or_default(),
        };
        let mut config = ClientConfig::default();
        if let Some(region) = self.region {
            config.region = region;
        }
        (credential, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "https://lb.api.qcloud.com/v2/index.php");
        assert_eq!(config.region, "gz");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn custom_endpoint_and_region() {
        let config = ClientConfig::default()
            .with_endpoint("http://127.0.0.1:8080/v2/index.php")
            .with_region("bj");
        assert_eq!(config.endpoint, "http://127.0.0.1:8080/v2/index.php");
        assert_eq!(config.region, "bj");
    }

    #[test]
    fn custom_timeout() {
        let config = ClientConfig::default().with_timeout(Duration::from_secs(60));
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn empty_options_keep_defaults() {
        let (credential, config) = ClientOptions::default().into_parts();
        assert_eq!(credential.secret_id, "");
        assert_eq!(credential.secret_key, "");
        assert_eq!(config.region, DEFAULT_REGION);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn options_region_overrides_default() {
        let opts = ClientOptions {
            region: Some("sh".into()),
            ..Default::default()
        };
        let (_, config) = opts.into_parts();
        assert_eq!(config.region, "sh");
    }
}
