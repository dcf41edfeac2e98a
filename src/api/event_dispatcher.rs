use indexmap::IndexSet;
use tracing::{trace, warn};

use crate::core::{project_series, reconcile_standard, resolve_material_options, resolve_standard_options};
use crate::error::ExplorerResult;
use crate::extensions::SessionNotification;

use super::validation::{validate_axis_field, validate_standard_choice};
use super::{Axis, ExplorerSession, InteractionEvent, SessionUpdate};

impl ExplorerSession {
    /// Applies one interaction event and runs its recompute chain.
    ///
    /// Invalid events (a standard that is not offered, an axis outside the
    /// numeric fields) are rejected before any state changes. Re-delivering
    /// an event with unchanged inputs yields the same state and output.
    pub fn dispatch(&mut self, event: InteractionEvent) -> ExplorerResult<SessionUpdate> {
        let kind = event.kind();
        let result = match event {
            InteractionEvent::CategoryChanged { category } => Ok(self.apply_category(category)),
            InteractionEvent::StandardChanged { standard } => self.apply_standard(standard),
            InteractionEvent::MaterialsChanged { materials } => Ok(self.apply_materials(materials)),
            InteractionEvent::AxisChanged { axis, field } => self.apply_axis(axis, field),
        };
        match &result {
            Ok(update) => trace!(
                event = kind,
                standard_reset = update.standard_reset,
                series = self.series.len(),
                "event applied"
            ),
            Err(err) => warn!(event = kind, error = %err, "event rejected"),
        }
        result
    }

    /// Applies a sequence of events, stopping at the first rejected one.
    pub fn dispatch_all<I>(&mut self, events: I) -> ExplorerResult<Vec<SessionUpdate>>
    where
        I: IntoIterator<Item = InteractionEvent>,
    {
        events.into_iter().map(|event| self.dispatch(event)).collect()
    }

    fn apply_category(&mut self, category: Option<String>) -> SessionUpdate {
        self.state.category = category.filter(|value| !value.is_empty());

        let standard_options = resolve_standard_options(&self.dataset, self.state.category.as_deref());
        let reconciled = reconcile_standard(&standard_options, self.state.standard.as_deref());
        let standard_reset = self.state.standard.is_some() && reconciled.is_none();
        self.state.standard = reconciled;
        self.standard_options = standard_options;
        self.emit(SessionNotification::StandardOptionsChanged {
            len: self.standard_options.len(),
        });
        if standard_reset {
            self.emit(SessionNotification::StandardReset);
        }

        self.refresh_material_options();
        SessionUpdate {
            standard_options: Some(self.standard_options.clone()),
            material_options: Some(self.material_options.clone()),
            series: None,
            standard_reset,
        }
    }

    fn apply_standard(&mut self, standard: Option<String>) -> ExplorerResult<SessionUpdate> {
        validate_standard_choice(standard.as_deref(), &self.standard_options)?;
        self.state.standard = standard.filter(|value| !value.is_empty());

        self.refresh_material_options();
        Ok(SessionUpdate {
            material_options: Some(self.material_options.clone()),
            ..SessionUpdate::default()
        })
    }

    fn apply_materials(&mut self, materials: Vec<String>) -> SessionUpdate {
        self.state.materials = materials.into_iter().collect::<IndexSet<String>>();

        self.refresh_material_options();
        self.refresh_series();
        SessionUpdate {
            material_options: Some(self.material_options.clone()),
            series: Some(self.series.clone()),
            ..SessionUpdate::default()
        }
    }

    fn apply_axis(&mut self, axis: Axis, field: String) -> ExplorerResult<SessionUpdate> {
        validate_axis_field(self.dataset.schema(), &field)?;
        match axis {
            Axis::X => self.state.x_axis = field,
            Axis::Y => self.state.y_axis = field,
        }

        self.refresh_series();
        Ok(SessionUpdate {
            series: Some(self.series.clone()),
            ..SessionUpdate::default()
        })
    }

    fn refresh_material_options(&mut self) {
        self.material_options = resolve_material_options(
            &self.dataset,
            self.state.standard.as_deref(),
            self.state.category.as_deref(),
            &self.state.materials,
        );
        self.emit(SessionNotification::MaterialOptionsChanged {
            len: self.material_options.len(),
        });
    }

    fn refresh_series(&mut self) {
        self.series = project_series(
            &self.dataset,
            &self.state.materials,
            &self.state.x_axis,
            &self.state.y_axis,
        );
        self.emit(SessionNotification::SeriesChanged {
            len: self.series.len(),
        });
    }
}
