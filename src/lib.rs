//! materx-explorer: cascading material filters and scatter projection.
//!
//! The crate keeps the filter cascade (category → standard → material) and
//! the x/y series projection as pure functions over an immutable dataset,
//! with a small event dispatcher on top for interactive hosts.

pub mod api;
pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod extensions;
pub mod telemetry;

pub use api::{ExplorerConfig, ExplorerSession};
pub use error::{ExplorerError, ExplorerResult};
