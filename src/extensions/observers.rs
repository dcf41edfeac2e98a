use serde::{Deserialize, Serialize};

/// Read-only session summary passed to observer hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub category: Option<String>,
    pub standard: Option<String>,
    pub selected_materials: usize,
    pub x_axis: String,
    pub y_axis: String,
    pub standard_options_len: usize,
    pub material_options_len: usize,
    pub series_len: usize,
}

/// Notification stream exposed to observers.
///
/// Emitted after the session state has been updated, in recompute-chain
/// order: options first, then reconciliation, then series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionNotification {
    StandardOptionsChanged { len: usize },
    StandardReset,
    MaterialOptionsChanged { len: usize },
    SeriesChanged { len: usize },
}

/// Hook interface for presentation layers.
///
/// Observers react to recomputed output without mutating session state.
pub trait SessionObserver {
    fn id(&self) -> &str;
    fn on_notification(&mut self, notification: SessionNotification, context: &SessionContext);
}
