use tracing::debug;

use crate::core::{
    Dataset, Series, resolve_axis_options, resolve_category_options, resolve_material_options,
    resolve_standard_options,
};
use crate::error::{ExplorerError, ExplorerResult};
use crate::extensions::{SessionContext, SessionObserver};

use super::{ExplorerConfig, ExplorerView, PlotFigure, SelectionState};

/// Event dispatcher owning the single selection state of one session.
///
/// `ExplorerSession` runs the recompute chain (options, reconciliation,
/// series) for one event at a time and caches the derived output so reads
/// never recompute.
pub struct ExplorerSession {
    pub(super) dataset: Dataset,
    pub(super) state: SelectionState,
    pub(super) category_options: Vec<String>,
    pub(super) standard_options: Vec<String>,
    pub(super) material_options: Vec<String>,
    pub(super) axis_options: Vec<String>,
    pub(super) series: Vec<Series>,
    pub(super) observers: Vec<Box<dyn SessionObserver>>,
}

impl ExplorerSession {
    /// Starts a session with default axes and no filters.
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        let state = SelectionState::new(dataset.schema());
        Self::with_state(dataset, state)
    }

    /// Starts a session using the configured initial axes.
    ///
    /// The axes must exist in the dataset's own schema, which may differ from
    /// the config when the dataset was built elsewhere.
    pub fn with_config(dataset: Dataset, config: &ExplorerConfig) -> ExplorerResult<Self> {
        let (x_axis, y_axis) = config.initial_axes()?;
        for axis in [&x_axis, &y_axis] {
            if !dataset.schema().contains(axis) {
                return Err(ExplorerError::InvalidConfig(format!(
                    "default axis `{axis}` is not part of the dataset schema"
                )));
            }
        }
        let mut state = SelectionState::new(dataset.schema());
        state.x_axis = x_axis;
        state.y_axis = y_axis;
        Ok(Self::with_state(dataset, state))
    }

    fn with_state(dataset: Dataset, state: SelectionState) -> Self {
        let category_options = resolve_category_options(&dataset);
        let standard_options = resolve_standard_options(&dataset, None);
        let material_options = resolve_material_options(&dataset, None, None, &state.materials);
        let axis_options = resolve_axis_options(dataset.schema());
        debug!(
            rows = dataset.len(),
            categories = category_options.len(),
            standards = standard_options.len(),
            materials = material_options.len(),
            "explorer session started"
        );
        Self {
            dataset,
            state,
            category_options,
            standard_options,
            material_options,
            axis_options,
            series: Vec::new(),
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub fn category_options(&self) -> &[String] {
        &self.category_options
    }

    #[must_use]
    pub fn standard_options(&self) -> &[String] {
        &self.standard_options
    }

    #[must_use]
    pub fn material_options(&self) -> &[String] {
        &self.material_options
    }

    #[must_use]
    pub fn axis_options(&self) -> &[String] {
        &self.axis_options
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Snapshot of every derived output plus the current selection.
    #[must_use]
    pub fn view(&self) -> ExplorerView {
        ExplorerView {
            category_options: self.category_options.clone(),
            standard_options: self.standard_options.clone(),
            material_options: self.material_options.clone(),
            axis_options: self.axis_options.clone(),
            selection: self.state.clone(),
            selected_materials: self.state.sorted_materials(),
            series: self.series.clone(),
        }
    }

    #[must_use]
    pub fn figure(&self) -> PlotFigure {
        PlotFigure::build(&self.series, &self.state.x_axis, &self.state.y_axis)
    }

    pub(super) fn observer_context(&self) -> SessionContext {
        SessionContext {
            category: self.state.category.clone(),
            standard: self.state.standard.clone(),
            selected_materials: self.state.materials.len(),
            x_axis: self.state.x_axis.clone(),
            y_axis: self.state.y_axis.clone(),
            standard_options_len: self.standard_options.len(),
            material_options_len: self.material_options.len(),
            series_len: self.series.len(),
        }
    }
}
