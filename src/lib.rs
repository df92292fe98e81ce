//! Tencent Cloud CLB (cloud load balancer) v2 API client for Rust.
//!
//! This crate provides both async and sync (blocking) clients that sign and
//! send the CLB backend-management actions:
//!
//! - [`Client::modify_forward_seventh_backends`] / [`Client::modify_forward_fourth_backends_weight`]
//! - [`Client::modify_forward_seventh_backends_port`] / [`Client::modify_forward_fourth_backends_port`]
//! - [`Client::describe_forward_lb_backends`]
//! - [`Client::register_instances_with_forward_lb_seventh_listener`] / [`Client::register_instances_with_forward_lb_fourth_listener`]
//! - [`Client::deregister_instances_from_forward_lb`] / [`Client::deregister_instances_from_forward_lb_fourth_listener`]
//!
//! Every call returns the raw response body; interpreting the JSON envelope
//! is left to the caller.
//!
//! # Quick Start (async)
//!
//! ```no_run
//! use rs_qcloud_clb::{Client, Credential};
//!
//! # async fn example() -> rs_qcloud_clb::Result<()> {
//! let client = Client::new(Credential::new("your-secret-id", "your-secret-key"))?;
//!
//! let body = client.describe_forward_lb_backends("lb-abc123").await?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod sign;
pub mod transport;

#[cfg(feature = "blocking")]
pub mod blocking;

mod request;

pub use action::{Action, BackendRequest, OptionalField};
pub use client::Client;
pub use config::{ClientConfig, ClientOptions};
pub use credential::Credential;
pub use error::{ClbError, Result};
pub use transport::{HttpTransport, Transport};

// Compile-time assertions: key types must be Send + Sync for use across threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    let _ = assert_send_sync::<Client>;
    let _ = assert_send_sync::<ClbError>;
    let _ = assert_send_sync::<Credential>;
};
