use thiserror::Error;

/// Errors that can occur when using the CLB SDK.
///
/// Remote rejections are not represented here: a non-2xx status or a provider
/// error payload is handed back to the caller as the raw response body.
#[derive(Debug, Error)]
pub enum ClbError {
    /// HTTP/network layer error from reqwest (connect, timeout, DNS).
    #[error("HTTP request failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Signature computation error.
    #[error("signature error: {0}")]
    Signature(String),

    /// The HTTP transport could not be initialized.
    #[error("config error: {0}")]
    Config(String),
}

impl ClbError {
    /// Returns `true` if the request timed out in the transport.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClbError::HttpClient(e) if e.is_timeout())
    }

    /// Returns `true` if the transport could not reach the endpoint.
    pub fn is_connect(&self) -> bool {
        matches!(self, ClbError::HttpClient(e) if e.is_connect())
    }
}

/// A specialized Result type for CLB operations.
pub type Result<T> = std::result::Result<T, ClbError>;
