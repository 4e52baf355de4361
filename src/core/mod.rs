//! core
//!
//! Configuration, context resolution and navigation state.
//!
//! # Modules
//!
//! - [`config`] - Persisted profile configuration
//! - [`context`] - Per-invocation context resolved from flags and profiles
//! - [`profile`] - Kubeconfig operations on profiles
//! - [`navigation`] - Navigation state derived from kubeconfig
//!
//! # Design Principles
//!
//! - Resolution is pure: no network I/O, filesystem access only to read config
//! - Every override layer is explicit and optional per field
//! - Derived values are immutable once constructed

pub mod config;
pub mod context;
pub mod navigation;
pub mod profile;
