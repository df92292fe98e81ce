//! Supported CLB actions and their action-specific parameters.

use bon::Builder;

/// A remote CLB v2 operation, sent as the `Action` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ModifyForwardSeventhBackends,
    ModifyForwardFourthBackendsWeight,
    ModifyForwardSeventhBackendsPort,
    ModifyForwardFourthBackendsPort,
    DescribeForwardLBBackends,
    RegisterInstancesWithForwardLBSeventhListener,
    RegisterInstancesWithForwardLBFourthListener,
    DeregisterInstancesFromForwardLB,
    DeregisterInstancesFromForwardLBFourthListener,
}

/// An optional backend field that some actions accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalField {
    Weight,
    LocationId,
    Domain,
    Url,
}

const SEVENTH_LAYER_FIELDS: &[OptionalField] = &[
    OptionalField::Weight,
    OptionalField::LocationId,
    OptionalField::Domain,
    OptionalField::Url,
];

const FOURTH_LAYER_FIELDS: &[OptionalField] = &[OptionalField::Weight];

const SEVENTH_LAYER_DEREGISTER_FIELDS: &[OptionalField] = &[
    OptionalField::LocationId,
    OptionalField::Domain,
    OptionalField::Url,
];

impl Action {
    pub const ALL: [Action; 9] = [
        Action::ModifyForwardSeventhBackends,
        Action::ModifyForwardFourthBackendsWeight,
        Action::ModifyForwardSeventhBackendsPort,
        Action::ModifyForwardFourthBackendsPort,
        Action::DescribeForwardLBBackends,
        Action::RegisterInstancesWithForwardLBSeventhListener,
        Action::RegisterInstancesWithForwardLBFourthListener,
        Action::DeregisterInstancesFromForwardLB,
        Action::DeregisterInstancesFromForwardLBFourthListener,
    ];

    /// The identifier sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::ModifyForwardSeventhBackends => "ModifyForwardSeventhBackends",
            Action::ModifyForwardFourthBackendsWeight => "ModifyForwardFourthBackendsWeight",
            Action::ModifyForwardSeventhBackendsPort => "ModifyForwardSeventhBackendsPort",
            Action::ModifyForwardFourthBackendsPort => "ModifyForwardFourthBackendsPort",
            Action::DescribeForwardLBBackends => "DescribeForwardLBBackends",
            Action::RegisterInstancesWithForwardLBSeventhListener => {
                "RegisterInstancesWithForwardLBSeventhListener"
            }
            Action::RegisterInstancesWithForwardLBFourthListener => {
                "RegisterInstancesWithForwardLBFourthListener"
            }
            Action::DeregisterInstancesFromForwardLB => "DeregisterInstancesFromForwardLB",
            Action::DeregisterInstancesFromForwardLBFourthListener => {
                "DeregisterInstancesFromForwardLBFourthListener"
            }
        }
    }

    /// Optional backend fields this action forwards to the service.
    pub fn accepts(self) -> &'static [OptionalField] {
        match self {
            Action::ModifyForwardSeventhBackends
            | Action::ModifyForwardSeventhBackendsPort
            | Action::RegisterInstancesWithForwardLBSeventhListener => SEVENTH_LAYER_FIELDS,
            Action::ModifyForwardFourthBackendsWeight
            | Action::ModifyForwardFourthBackendsPort
            | Action::RegisterInstancesWithForwardLBFourthListener
            | Action::DeregisterInstancesFromForwardLBFourthListener => FOURTH_LAYER_FIELDS,
            Action::DeregisterInstancesFromForwardLB => SEVENTH_LAYER_DEREGISTER_FIELDS,
            Action::DescribeForwardLBBackends => &[],
        }
    }

    /// Whether the action moves a backend to a new port (`backends.1.newPort`).
    pub fn requires_new_port(self) -> bool {
        matches!(
            self,
            Action::ModifyForwardSeventhBackendsPort | Action::ModifyForwardFourthBackendsPort
        )
    }

    /// Whether the action targets an application-layer (HTTP/HTTPS) listener.
    pub fn is_seventh_layer(self) -> bool {
        matches!(
            self,
            Action::ModifyForwardSeventhBackends
                | Action::ModifyForwardSeventhBackendsPort
                | Action::RegisterInstancesWithForwardLBSeventhListener
                | Action::DeregisterInstancesFromForwardLB
        )
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single backend on a listener forwarding rule.
///
/// Optional fields are only sent when set and when the action accepts them
/// (see [`Action::accepts`]). Fourth-layer actions ignore `location_id`,
/// `domain` and `url`.
///
/// ```
/// use rs_qcloud_clb::BackendRequest;
///
/// let request = BackendRequest::builder()
///     .load_balancer_id("lb-abc123")
///     .listener_id("lbl-xyz")
///     .instance_id("ins-001")
///     .port(8080)
///     .weight(20)
///     .build();
/// assert_eq!(request.weight, Some(20));
/// assert!(request.domain.is_none());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct BackendRequest {
    /// Load balancer instance ID.
    #[builder(into)]
    pub load_balancer_id: String,
    /// Listener ID on the load balancer.
    #[builder(into)]
    pub listener_id: String,
    /// Backend server instance ID.
    #[builder(into)]
    pub instance_id: String,
    /// Port the backend listens on (1-65535).
    pub port: u16,
    /// Backend weight, 0-100. The service default is 10.
    pub weight: Option<u32>,
    /// Forwarding rule ID.
    #[builder(into)]
    pub location_id: Option<String>,
    /// Forwarding rule domain.
    #[builder(into)]
    pub domain: Option<String>,
    /// Forwarding rule path.
    #[builder(into)]
    pub url: Option<String>,
}

impl BackendRequest {
    /// Flattens the request into the action-specific query parameters.
    ///
    /// `new_port` is only emitted for actions that move a backend.
    pub(crate) fn to_params(
        &self,
        action: Action,
        new_port: Option<u16>,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("loadBalancerId", self.load_balancer_id.clone()),
            ("listenerId", self.listener_id.clone()),
            ("backends.1.instanceId", self.instance_id.clone()),
            ("backends.1.port", self.port.to_string()),
        ];
        if action.requires_new_port()
            && let Some(new_port) = new_port
        {
            params.push(("backends.1.newPort", new_port.to_string()));
        }
        for field in action.accepts() {
            let entry = match field {
                OptionalField::Weight => self
                    .weight
                    .map(|w| ("backends.1.weight", w.to_string())),
                OptionalField::LocationId => {
                    self.location_id.clone().map(|v| ("locationIds.1", v))
                }
                OptionalField::Domain => self.domain.clone().map(|v| ("domain", v)),
                OptionalField::Url => self.url.clone().map(|v| ("url", v)),
            };
            params.extend(entry);
        }
        params
    }
}
