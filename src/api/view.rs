use serde::{Deserialize, Serialize};

use crate::core::Series;

use super::SelectionState;

/// Everything the presentation layer draws, derived from the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerView {
    pub category_options: Vec<String>,
    pub standard_options: Vec<String>,
    pub material_options: Vec<String>,
    pub axis_options: Vec<String>,
    pub selection: SelectionState,
    /// `selection` materials sorted for display.
    #[serde(default)]
    pub selected_materials: Vec<String>,
    pub series: Vec<Series>,
}
