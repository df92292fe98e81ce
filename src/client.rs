use tracing::debug;

use crate::action::{Action, BackendRequest};
use crate::config::{ClientConfig, ClientOptions};
use crate::credential::Credential;
use crate::error::Result;
use crate::request::build_request_url;
use crate::transport::{HttpTransport, Transport};

/// Async client for the Tencent Cloud CLB v2 API.
///
/// Every operation returns the raw response body. Non-2xx statuses and
/// provider error envelopes are not interpreted.
pub struct Client<T = HttpTransport> {
    transport: T,
    config: ClientConfig,
    credential: Credential,
}

impl Client {
    /// Creates a new client with an explicit credential.
    pub fn new(credential: Credential) -> Result<Self> {
        Self::with_config(credential, ClientConfig::default())
    }

    /// Creates a new client with an explicit credential and custom configuration.
    pub fn with_config(credential: Credential, config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::with_transport(credential, config, transport))
    }

    /// Creates a new client from loosely specified options.
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
    pub async fn modify_forward_seventh_backends(&self, request: BackendRequest) -> Result<String> {
        self.execute_backend(Action::ModifyForwardSeventhBackends, &request, None)
            .await
    }

    /// Modifies the weight of a backend on a fourth-layer listener.
    pub async fn modify_forward_fourth_backends_weight(
        &self,
        request: BackendRequest,
    ) -> Result<String> {
        self.execute_backend(Action::ModifyForwardFourthBackendsWeight, &request, None)
            .await
    }

    /// Moves a backend on a seventh-layer forwarding rule to `new_port`.
    pub async fn modify_forward_seventh_backends_port(
        &self,
        request: BackendRequest,
        new_port: u16,
    ) -> Result<String> {
        self.execute_backend(
            Action::ModifyForwardSeventhBackendsPort,
            &request,
            Some(new_port),
        )
        .await
    }

    /// Moves a backend on a fourth-layer listener to `new_port`.
    pub async fn modify_forward_fourth_backends_port(
        &self,
        request: BackendRequest,
        new_port: u16,
    ) -> Result<String> {
        self.execute_backend(
            Action::ModifyForwardFourthBackendsPort,
            &request,
            Some(new_port),
        )
        .await
    }

    /// Lists the backends bound to a load balancer.
    pub async fn describe_forward_lb_backends(&self, load_balancer_id: &str) -> Result<String> {
        let params = [("loadBalancerId", load_balancer_id.to_string())];
        self.execute(Action::DescribeForwardLBBackends, &params)
            .await
    }

    /// Binds a backend to a seventh-layer forwarding rule.
    pub async fn register_instances_with_forward_lb_seventh_listener(
        &self,
        request: BackendRequest,
    ) -> Result<String> {
        self.execute_backend(
            Action::RegisterInstancesWithForwardLBSeventhListener,
            &request,
            None,
        )
        .await
    }

    /// Binds a backend to a fourth-layer listener.
    pub async fn register_instances_with_forward_lb_fourth_listener(
        &self,
        request: BackendRequest,
    ) -> Result<String> {
        self.execute_backend(
            Action::RegisterInstancesWithForwardLBFourthListener,
            &request,
            None,
        )
        .await
    }

    /// Unbinds a backend from a seventh-layer forwarding rule.
    pub async fn deregister_instances_from_forward_lb(
        &self,
        request: BackendRequest,
    ) -> Result<String> {
        self.execute_backend(Action::DeregisterInstancesFromForwardLB, &request, None)
            .await
    }

    /// Unbinds a backend from a fourth-layer listener.
    pub async fn deregister_instances_from_forward_lb_fourth_listener(
        &self,
        request: BackendRequest,
    ) -> Result<String> {
        self.execute_backend(
            Action::DeregisterInstancesFromForwardLBFourthListener,
            &request,
            None,
        )
        .await
    }

    async fn execute_backend(
        &self,
        action: Action,
        request: &BackendRequest,
        new_port: Option<u16>,
    ) -> Result<String> {
        let params = request.to_params(action, new_port);
        self.execute(action, &params).await
    }

    async fn execute(&self, action: Action, params: &[(&str, String)]) -> Result<String> {
        let url = build_request_url(action, params, &self.credential, &self.config)?;

        debug!(
            %action,
            region = %self.config.region,
            endpoint = %self.config.endpoint,
            "sending CLB request"
        );
        let body = self.transport.get(&url).await?;
        debug!(%action, bytes = body.len(), "CLB request finished");

        Ok(body)
    }
}
