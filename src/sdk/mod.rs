//! sdk
//!
//! Client for the SaaS platform REST API.
//!
//! # Modules
//!
//! - `client`: shared [`ClientConfig`] (cookie session, TLS, tracing) and [`SdkError`]
//! - `controlplanes`: control plane service
//! - `organizations`: organization service
//! - `trace`: request/response tracing selected by the debug level
//!
//! Commands build a `ClientConfig` from the resolved context with
//! [`crate::core::context::Context::client_config`] and pass it to the
//! service clients they need.

mod client;
pub mod controlplanes;
pub mod organizations;
pub mod trace;

pub use client::{ClientConfig, SdkError, COOKIE_NAME, USER_AGENT};
pub use controlplanes::ControlPlanesClient;
pub use organizations::{Organization, OrganizationsClient};
pub use trace::HttpTrace;
