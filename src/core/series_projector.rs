use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{DataPoint, Dataset};

/// One plotted trace: a material and its `(x, y)` samples in row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<DataPoint>,
}

impl Series {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Projects selected materials onto an `x_axis`/`y_axis` field pairing.
///
/// Output order follows `materials`. Rows missing either axis value are
/// dropped, but a material left without points still yields an empty
/// series so it stays visible in a legend. An axis outside the dataset
/// schema behaves like an all-missing column.
///
/// The function is deterministic and side-effect free.
#[must_use]
pub fn project_series<I>(dataset: &Dataset, materials: I, x_axis: &str, y_axis: &str) -> Vec<Series>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let labels: Vec<String> = materials
        .into_iter()
        .map(|material| material.as_ref().to_owned())
        .collect();
    if labels.is_empty() {
        return Vec::new();
    }

    let schema = dataset.schema();
    let axes = schema.index_of(x_axis).zip(schema.index_of(y_axis));

    // Large selections project per material in parallel; collect keeps
    // the caller's order.
    #[cfg(feature = "parallel-projection")]
    {
        labels
            .into_par_iter()
            .map(|label| project_single_material(dataset, label, axes))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        labels
            .into_iter()
            .map(|label| project_single_material(dataset, label, axes))
            .collect()
    }
}

fn project_single_material(
    dataset: &Dataset,
    label: String,
    axes: Option<(usize, usize)>,
) -> Series {
    let points = match axes {
        Some((x_index, y_index)) => dataset
            .rows()
            .iter()
            .filter(|row| row.material.as_deref() == Some(label.as_str()))
            .filter_map(|row| Some(DataPoint::new(row.value(x_index)?, row.value(y_index)?)))
            .collect(),
        None => Vec::new(),
    };
    Series { label, points }
}
