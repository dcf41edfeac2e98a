use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_NUMERIC_FIELDS, FieldSchema};
use crate::data::{DatasetSource, MATERX_DATASET_URL};
use crate::error::{ExplorerError, ExplorerResult};

/// Public explorer bootstrap configuration.
///
/// Serializable so hosts can keep their setup in a JSON file instead of
/// inventing an ad-hoc format. Missing keys fall back to the MaterX defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_numeric_fields")]
    pub numeric_fields: Vec<String>,
    #[serde(default)]
    pub default_x_axis: Option<String>,
    #[serde(default)]
    pub default_y_axis: Option<String>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            numeric_fields: default_numeric_fields(),
            default_x_axis: None,
            default_y_axis: None,
        }
    }
}

impl ExplorerConfig {
    /// Sets the dataset location (path or `http(s)` URL).
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Replaces the numeric field list used for coercion and axis choices.
    #[must_use]
    pub fn with_numeric_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.numeric_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the initial x/y axes of new sessions.
    #[must_use]
    pub fn with_default_axes(mut self, x_axis: impl Into<String>, y_axis: impl Into<String>) -> Self {
        self.default_x_axis = Some(x_axis.into());
        self.default_y_axis = Some(y_axis.into());
        self
    }

    #[must_use]
    pub fn dataset_source(&self) -> DatasetSource {
        DatasetSource::parse(&self.source)
    }

    /// Builds the validated field schema.
    pub fn schema(&self) -> ExplorerResult<FieldSchema> {
        FieldSchema::new(self.numeric_fields.iter().cloned())
    }

    /// Resolves the initial axes against the configured field list.
    pub fn initial_axes(&self) -> ExplorerResult<(String, String)> {
        let schema = self.schema()?;
        let x_axis = resolve_axis(&schema, self.default_x_axis.as_deref(), schema.default_x_axis())?;
        let y_axis = resolve_axis(&schema, self.default_y_axis.as_deref(), schema.default_y_axis())?;
        Ok((x_axis, y_axis))
    }

    pub fn validate(&self) -> ExplorerResult<()> {
        if self.source.trim().is_empty() {
            return Err(ExplorerError::InvalidConfig(
                "dataset source must not be empty".to_owned(),
            ));
        }
        self.initial_axes().map(|_| ())
    }

    pub fn from_json_str(input: &str) -> ExplorerResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ExplorerError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> ExplorerResult<Self> {
        let input = fs::read_to_string(path).map_err(|e| {
            ExplorerError::InvalidConfig(format!("failed to read `{}`: {e}", path.display()))
        })?;
        Self::from_json_str(&input)
    }

    pub fn to_json_pretty(&self) -> ExplorerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ExplorerError::InvalidData(format!("failed to serialize config: {e}")))
    }
}

fn resolve_axis(schema: &FieldSchema, requested: Option<&str>, fallback: &str) -> ExplorerResult<String> {
    match requested {
        Some(field) if schema.contains(field) => Ok(field.to_owned()),
        Some(field) => Err(ExplorerError::InvalidConfig(format!(
            "default axis `{field}` is not a numeric field"
        ))),
        None => Ok(fallback.to_owned()),
    }
}

fn default_source() -> String {
    MATERX_DATASET_URL.to_owned()
}

fn default_numeric_fields() -> Vec<String> {
    DEFAULT_NUMERIC_FIELDS.iter().map(|f| (*f).to_owned()).collect()
}
