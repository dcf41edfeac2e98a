use serde::{Deserialize, Serialize};

use crate::core::Series;

use super::Axis;

/// User interaction delivered by the presentation layer.
///
/// Serialized with an `event` tag so hosts can script sessions as JSON:
/// `{"event": "axis_changed", "axis": "x", "field": "Price"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InteractionEvent {
    CategoryChanged {
        #[serde(default)]
        category: Option<String>,
    },
    StandardChanged {
        #[serde(default)]
        standard: Option<String>,
    },
    MaterialsChanged {
        #[serde(default)]
        materials: Vec<String>,
    },
    AxisChanged {
        axis: Axis,
        field: String,
    },
}

impl InteractionEvent {
    #[must_use]
    pub fn category_changed(category: Option<&str>) -> Self {
        Self::CategoryChanged {
            category: category.map(str::to_owned),
        }
    }

    #[must_use]
    pub fn standard_changed(standard: Option<&str>) -> Self {
        Self::StandardChanged {
            standard: standard.map(str::to_owned),
        }
    }

    #[must_use]
    pub fn materials_changed<I, S>(materials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MaterialsChanged {
            materials: materials.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn axis_changed(axis: Axis, field: &str) -> Self {
        Self::AxisChanged {
            axis,
            field: field.to_owned(),
        }
    }

    /// Short event name used in logs and notifications.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CategoryChanged { .. } => "category_changed",
            Self::StandardChanged { .. } => "standard_changed",
            Self::MaterialsChanged { .. } => "materials_changed",
            Self::AxisChanged { .. } => "axis_changed",
        }
    }
}

/// What an applied event recomputed.
///
/// `None` fields were left untouched by the event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionUpdate {
    pub standard_options: Option<Vec<String>>,
    pub material_options: Option<Vec<String>>,
    pub series: Option<Vec<Series>>,
    /// `true` when a category change dropped the previous standard.
    pub standard_reset: bool,
}
