//! Process-wide read-only dataset slot.
//!
//! The slot is written once, before the interactive session starts, and is
//! never reloaded.

use std::sync::OnceLock;

use crate::core::Dataset;
use crate::error::{ExplorerError, ExplorerResult};

static SNAPSHOT: OnceLock<Dataset> = OnceLock::new();

/// Installs `dataset` as the process snapshot.
///
/// Fails with [`ExplorerError::SnapshotAlreadyInstalled`] on any later call.
pub fn install(dataset: Dataset) -> ExplorerResult<&'static Dataset> {
    let mut installed = false;
    let snapshot = SNAPSHOT.get_or_init(|| {
        installed = true;
        dataset
    });
    if installed {
        Ok(snapshot)
    } else {
        Err(ExplorerError::SnapshotAlreadyInstalled)
    }
}

#[must_use]
pub fn get() -> Option<&'static Dataset> {
    SNAPSHOT.get()
}
