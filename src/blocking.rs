//! Synchronous (blocking) client for the Tencent Cloud CLB v2 API.
//!
//! This module is only available when the `blocking` feature is enabled.
//! It mirrors the async [`crate::client::Client`] API using `reqwest::blocking`.
//!
//! # Example
//!
//! ```no_run
//! use rs_qcloud_clb::blocking::Client;
//! use rs_qcloud_clb::{BackendRequest, Credential};
//!
//! fn main() -> rs_qcloud_clb::Result<()> {
//!     let client = Client::new(Credential::new("secret-id", "secret-key"))?;
//!
//!     let request = BackendRequest::builder()
//!         .load_balancer_id("lb-abc123")
//!         .listener_id("lbl-xyz")
//!         .instance_id("ins-001")
//!         .port(80)
//!         .weight(50)
//!         .build();
//!
//!     let body = client.modify_forward_fourth_backends_weight(request)?;
//!     println!("{body}");
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use tracing::debug;

use crate::action::{Action, BackendRequest};
use crate::config::{ClientConfig, ClientOptions};
use crate::credential::Credential;
use crate::error::{ClbError, Result};
use crate::request::build_request_url;

/// Blocking counterpart of [`crate::transport::Transport`].
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<String>;
}

/// Default blocking transport backed by `reqwest::blocking::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Builds a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClbError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send()?;
        debug!(status = %response.status(), "CLB response received");
        Ok(response.text()?)
    }
}

/// Synchronous client for the Tencent Cloud CLB v2 API.
pub struct Client<T = HttpTransport> {
    transport: T,
    config: ClientConfig,
    credential: Credential,
}

impl Client {
    /// Creates a new blocking client with an explicit credential.
    pub fn new(credential: Credential) -> Result<Self> {
        Self::with_config(credential, ClientConfig::default())
    }

    /// Creates a new blocking client with custom configuration.
    pub fn with_config(credential: Credential, config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::with_transport(credential, config, transport))
    }

    /// Creates a new blocking client from loosely specified options.
    pub fn from_options(options: ClientOptions) -> Result<Self> {
        let (credential, config) = options.into_parts();
        Self::with_config(credential, config)
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client over a caller-supplied transport.
    pub fn with_transport(credential: Credential, config: ClientConfig, transport: T) -> Self {
        Self {
            transport,
            config,
            credential,
        }
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Modifies the weight of a backend on a seventh-layer forwarding rule.
    pub fn modify_forward_seventh_backends(&self, request: BackendRequest) -> Result<String> {
        self.execute_backend(Action::ModifyForwardSeventhBackends, &request, None)
    }

    /// Modifies the weight of a backend on a fourth-layer listener.
    pub fn modify_forward_fourth_backends_weight(&self, request: BackendRequest) -> Result<String> {
        self.execute_backend(Action::ModifyForwardFourthBackendsWeight, &request, None)
    }

    /// Moves a backend on a seventh-layer forwarding rule to `new_port`.
    pub fn modify_forward_seventh_backends_port(
        &self,
        request: BackendRequest,
        new_port: u16,
    ) -> Result<String> {
        self.execute_backend(
            Action::ModifyForwardSeventhBackendsPort,
            &request,
            Some(new_port),
        )
    }

    /// Moves a backend on a fourth-layer listener to `new_port`.
    pub fn modify_forward_fourth_backends_port(
        &self,
        request: BackendRequest,
        new_port: u16,
    ) -> Result<String> {
        self.execute_backend(
            Action::ModifyForwardFourthBackendsPort,
            &request,
            Some(new_port),
        )
    }

    /// Lists the backends bound to a load balancer.
    pub fn describe_forward_lb_backends(&self, load_balancer_id: &str) -> Result<String> {
        let params = [("loadBalancerId", load_balancer_id.to_string())];
        self.execute(Action::DescribeForwardLBBackends, &params)
    }

    /// Binds a backend to a seventh-layer forwarding rule.
    pub fn register_instances_with_forward_lb_seventh_listener(
        &self,
        request: BackendRequest,
    ) -> Result<String> {
        self.execute_backend(
            Action::RegisterInstancesWithForwardLBSeventhListener,
            &request,
            None,
        )
    }

    /// Binds a backend to a fourth-layer listener.
    pub fn register_instances_with_forward_lb_fourth_listener(
        &self,
        request: BackendRequest,
    ) -> Result<String> {
        self.execute_backend(
            Action::RegisterInstancesWithForwardLBFourthListener,
            &request,
            None,
        )
    }

    /// Unbinds a backend from a seventh-layer forwarding rule.
    pub fn deregister_instances_from_forward_lb(&self, request: BackendRequest) -> Result<String> {
        self.execute_backend(Action::DeregisterInstancesFromForwardLB, &request, None)
    }

    /// Unbinds a backend from a fourth-layer listener.
    pub fn deregister_instances_from_forward_lb_fourth_listener(
        &self,
        request: BackendRequest,
    ) -> Result<String> {
        self.execute_backend(
            Action::DeregisterInstancesFromForwardLBFourthListener,
            &request,
            None,
        )
    }

    fn execute_backend(
        &self,
        action: Action,
        request: &BackendRequest,
        new_port: Option<u16>,
    ) -> Result<String> {
        let params = request.to_params(action, new_port);
        self.execute(action, &params)
    }

    fn execute(&self, action: Action, params: &[(&str, String)]) -> Result<String> {
        let url = build_request_url(action, params, &self.credential, &self.config)?;

        debug!(
            %action,
            region = %self.config.region,
            endpoint = %self.config.endpoint,
            "sending CLB request"
        );
        let body = self.transport.get(&url)?;
        debug!(%action, bytes = body.len(), "CLB request finished");

        Ok(body)
    }
}
