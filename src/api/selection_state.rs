use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::FieldSchema;

/// Plot axis addressed by an axis-change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

/// Mutable filter and plot selection of one session.
///
/// `materials` keeps insertion order because series are projected in the
/// order the user picked them; option lists are sorted independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub(crate) category: Option<String>,
    pub(crate) standard: Option<String>,
    pub(crate) materials: IndexSet<String>,
    pub(crate) x_axis: String,
    pub(crate) y_axis: String,
}

impl SelectionState {
    /// Initial state: no filters, no materials, first two schema fields as axes.
    #[must_use]
    pub fn new(schema: &FieldSchema) -> Self {
        Self {
            category: None,
            standard: None,
            materials: IndexSet::new(),
            x_axis: schema.default_x_axis().to_owned(),
            y_axis: schema.default_y_axis().to_owned(),
        }
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub fn standard(&self) -> Option<&str> {
        self.standard.as_deref()
    }

    #[must_use]
    pub fn materials(&self) -> &IndexSet<String> {
        &self.materials
    }

    /// Selected materials in display order.
    #[must_use]
    pub fn sorted_materials(&self) -> Vec<String> {
        let mut sorted: Vec<String> = self.materials.iter().cloned().collect();
        sorted.sort();
        sorted
    }

    #[must_use]
    pub fn x_axis(&self) -> &str {
        &self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> &str {
        &self.y_axis
    }

    #[must_use]
    pub fn axis(&self, axis: Axis) -> &str {
        match axis {
            Axis::X => &self.x_axis,
            Axis::Y => &self.y_axis,
        }
    }
}
