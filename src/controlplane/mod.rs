//! controlplane
//!
//! Control plane deletion against the SaaS API or a self-hosted space.
//!
//! Commands obtain a deleter through [`create_deleter`] and never name a
//! concrete implementation.

pub mod cloud;
pub mod factory;
pub mod mock;
pub mod space;
pub mod traits;

pub use factory::{create_deleter, DeleterSetup};
pub use traits::{ControlPlaneDeleter, DeleteError};
