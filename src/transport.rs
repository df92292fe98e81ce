//! HTTP transport used by the async [`Client`](crate::Client).

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::error::{ClbError, Result};

/// Issues a GET for a fully signed URL and returns the raw body.
///
/// Implementations must not inspect the status code: error envelopes from the
/// service are returned as ordinary bodies.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Default transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Builds a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClbError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send().await?;
        debug!(status = %response.status(), "CLB response received");
        Ok(response.text().await?)
    }
}
