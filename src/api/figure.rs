use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, Series};

/// Inclusive extent of every plotted point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Scatter trace ready for a chart widget.
///
/// `marker_labels` and `hover_text` run parallel to `points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureTrace {
    pub name: String,
    pub points: Vec<DataPoint>,
    pub marker_labels: Vec<String>,
    pub hover_text: Vec<String>,
}

/// Titled scatter figure built from projected series.
///
/// No series means no selection: the figure is blank and untitled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlotFigure {
    pub title: Option<String>,
    pub x_axis_title: Option<String>,
    pub y_axis_title: Option<String>,
    pub traces: Vec<FigureTrace>,
    pub bounds: Option<DataBounds>,
}

impl PlotFigure {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn build(series: &[Series], x_axis: &str, y_axis: &str) -> Self {
        if series.is_empty() {
            return Self::empty();
        }

        let traces: Vec<FigureTrace> = series
            .iter()
            .map(|entry| FigureTrace {
                name: entry.label.clone(),
                points: entry.points.clone(),
                marker_labels: vec![entry.label.clone(); entry.points.len()],
                hover_text: entry
                    .points
                    .iter()
                    .map(|point| hover_text(x_axis, y_axis, *point))
                    .collect(),
            })
            .collect();
        let bounds = data_bounds(&traces);

        Self {
            title: Some(format!("{y_axis} vs {x_axis}")),
            x_axis_title: Some(x_axis.to_owned()),
            y_axis_title: Some(y_axis.to_owned()),
            traces,
            bounds,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}

#[must_use]
pub fn hover_text(x_axis: &str, y_axis: &str, point: DataPoint) -> String {
    format!("{x_axis}: {}\n{y_axis}: {}", point.x, point.y)
}

fn data_bounds(traces: &[FigureTrace]) -> Option<DataBounds> {
    let points = || traces.iter().flat_map(|trace| trace.points.iter());
    let x_min = points().map(|p| OrderedFloat(p.x)).min()?;
    let x_max = points().map(|p| OrderedFloat(p.x)).max()?;
    let y_min = points().map(|p| OrderedFloat(p.y)).min()?;
    let y_max = points().map(|p| OrderedFloat(p.y)).max()?;
    Some(DataBounds {
        x_min: x_min.into_inner(),
        x_max: x_max.into_inner(),
        y_min: y_min.into_inner(),
        y_max: y_max.into_inner(),
    })
}
