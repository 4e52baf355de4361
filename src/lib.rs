//! up - a CLI for control planes in the cloud and in self-hosted spaces
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing and command handlers
//! - [`core`] - Profile configuration, context resolution and navigation state
//! - [`sdk`] - SaaS API client (cookie session, TLS, request tracing)
//! - [`controlplane`] - Control plane deletion against the API or a space
//! - [`ui`] - Prompts and output
//! - [`logging`] - `tracing` subscriber setup
//!
//! # Flow
//!
//! ```text
//! flags + env ──┐
//! profile base ─┼─► Context ─► client (API or space) ─► one call ─► one line of output
//! defaults ─────┘
//! ```

pub mod cli;
pub mod controlplane;
pub mod core;
pub mod logging;
pub mod sdk;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
