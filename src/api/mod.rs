//! Session-level API consumed by presentation hosts.
//!
//! The pure resolver/reconciler/projector functions live in [`crate::core`];
//! this module wires them behind an explicit event dispatcher.

mod event_dispatcher;
mod events;
mod figure;
mod json_contract;
mod observer_registry;
mod selection_state;
mod session;
mod session_config;
mod validation;
mod view;

pub use events::{InteractionEvent, SessionUpdate};
pub use figure::{DataBounds, FigureTrace, PlotFigure, hover_text};
pub use json_contract::{
    EXPLORER_VIEW_JSON_SCHEMA_V1, ExplorerViewJsonContractV1, PLOT_FIGURE_JSON_SCHEMA_V1,
    PlotFigureJsonContractV1,
};
pub use selection_state::{Axis, SelectionState};
pub use session::ExplorerSession;
pub use session_config::ExplorerConfig;
pub use view::ExplorerView;
