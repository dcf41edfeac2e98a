//! Host-facing hooks live here.
//!
//! Extensions observe the session; they never feed back into core paths.

pub mod observers;

pub use observers::{SessionContext, SessionNotification, SessionObserver};
