use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, ExplorerResult};

use super::{ExplorerSession, ExplorerView, PlotFigure};

pub const EXPLORER_VIEW_JSON_SCHEMA_V1: u32 = 1;
pub const PLOT_FIGURE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerViewJsonContractV1 {
    pub schema_version: u32,
    pub view: ExplorerView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotFigureJsonContractV1 {
    pub schema_version: u32,
    pub figure: PlotFigure,
}

impl ExplorerView {
    pub fn to_json_contract_v1_pretty(&self) -> ExplorerResult<String> {
        let payload = ExplorerViewJsonContractV1 {
            schema_version: EXPLORER_VIEW_JSON_SCHEMA_V1,
            view: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ExplorerError::InvalidData(format!("failed to serialize view contract v1: {e}"))
        })
    }

    /// Accepts a bare view or a v1 envelope.
    pub fn from_json_compat_str(input: &str) -> ExplorerResult<Self> {
        if let Ok(view) = serde_json::from_str::<ExplorerView>(input) {
            return Ok(view);
        }
        let payload: ExplorerViewJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ExplorerError::InvalidData(format!("failed to parse view json payload: {e}"))
        })?;
        if payload.schema_version != EXPLORER_VIEW_JSON_SCHEMA_V1 {
            return Err(ExplorerError::InvalidData(format!(
                "unsupported view schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.view)
    }
}

impl PlotFigure {
    pub fn to_json_contract_v1_pretty(&self) -> ExplorerResult<String> {
        let payload = PlotFigureJsonContractV1 {
            schema_version: PLOT_FIGURE_JSON_SCHEMA_V1,
            figure: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ExplorerError::InvalidData(format!("failed to serialize figure contract v1: {e}"))
        })
    }
}

impl ExplorerSession {
    pub fn view_json_contract_v1_pretty(&self) -> ExplorerResult<String> {
        self.view().to_json_contract_v1_pretty()
    }

    pub fn figure_json_contract_v1_pretty(&self) -> ExplorerResult<String> {
        self.figure().to_json_contract_v1_pretty()
    }
}
