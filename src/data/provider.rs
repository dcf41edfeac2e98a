use std::fmt;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::core::{
    CATEGORY_COLUMN, Dataset, FieldSchema, MATERIAL_COLUMN, Row, STANDARD_COLUMN,
};
use crate::error::{ExplorerError, ExplorerResult};

use super::coercion::{CoercionWarning, NumericCell, coerce_numeric_cell, is_missing_marker};
use super::table::{RawRecord, RawTable, parse_table};

/// Public MaterX table.
pub const MATERX_DATASET_URL: &str =
    "https://raw.githubusercontent.com/businessgroupbh/MaterX/refs/heads/main/materx.csv";

/// Where the dataset text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Path(PathBuf),
    Url(String),
}

impl DatasetSource {
    /// `http://` and `https://` locations are URLs, anything else is a path.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_owned())
        } else {
            Self::Path(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub dataset: Dataset,
    pub warnings: Vec<CoercionWarning>,
    pub loaded_at: DateTime<Utc>,
}

/// Seam between the session and wherever the table lives.
pub trait DatasetProvider {
    fn load(&self) -> ExplorerResult<LoadReport>;
}

/// Loads from a [`DatasetSource`].
#[derive(Debug, Clone)]
pub struct SourceProvider {
    source: DatasetSource,
    schema: FieldSchema,
}

impl SourceProvider {
    #[must_use]
    pub fn new(source: DatasetSource, schema: FieldSchema) -> Self {
        Self { source, schema }
    }

    #[must_use]
    pub fn source(&self) -> &DatasetSource {
        &self.source
    }
}

impl DatasetProvider for SourceProvider {
    fn load(&self) -> ExplorerResult<LoadReport> {
        load(&self.source, self.schema.clone())
    }
}

/// Loads from CSV text already held in memory.
#[derive(Debug, Clone)]
pub struct TextProvider {
    text: String,
    schema: FieldSchema,
}

impl TextProvider {
    #[must_use]
    pub fn new(text: impl Into<String>, schema: FieldSchema) -> Self {
        Self {
            text: text.into(),
            schema,
        }
    }
}

impl DatasetProvider for TextProvider {
    fn load(&self) -> ExplorerResult<LoadReport> {
        load_from_str(&self.text, self.schema.clone())
    }
}

/// Reads `source` once and builds the dataset.
pub fn load(source: &DatasetSource, schema: FieldSchema) -> ExplorerResult<LoadReport> {
    let text = match source {
        DatasetSource::Path(path) => {
            fs::read_to_string(path).map_err(|e| ExplorerError::SourceUnreachable {
                source_name: source.to_string(),
                reason: e.to_string(),
            })?
        }
        DatasetSource::Url(url) => fetch_remote(url)?,
    };
    debug!(source = %source, bytes = text.len(), "dataset source read");
    load_from_str(&text, schema)
}

/// Parses CSV text, checks required columns and coerces numeric cells.
pub fn load_from_str(text: &str, schema: FieldSchema) -> ExplorerResult<LoadReport> {
    let table = parse_table(text)?;
    let columns = ColumnMap::resolve(&table, &schema)?;

    let mut warnings = Vec::new();
    let rows: Vec<Row> = table
        .records
        .iter()
        .map(|record| build_row(record, &columns, &schema, &mut warnings))
        .collect();

    if !warnings.is_empty() {
        warn!(
            count = warnings.len(),
            "numeric cells could not be coerced and were stored as missing"
        );
        for warning in &warnings {
            debug!(
                line = warning.line,
                column = %warning.column,
                raw = %warning.raw,
                "coercion warning"
            );
        }
    }
    debug!(rows = rows.len(), fields = schema.len(), "dataset loaded");

    Ok(LoadReport {
        dataset: Dataset::new(schema, rows),
        warnings,
        loaded_at: Utc::now(),
    })
}

struct ColumnMap {
    category: usize,
    standard: usize,
    material: usize,
    numeric: Vec<usize>,
}

impl ColumnMap {
    fn resolve(table: &RawTable, schema: &FieldSchema) -> ExplorerResult<Self> {
        let missing: Vec<String> = schema
            .required_columns()
            .filter(|name| table.column_index(name).is_none())
            .map(str::to_owned)
            .collect();
        if !missing.is_empty() {
            return Err(ExplorerError::MissingColumns { columns: missing });
        }

        let index = |name: &str| table.column_index(name).unwrap_or_default();
        Ok(Self {
            category: index(CATEGORY_COLUMN),
            standard: index(STANDARD_COLUMN),
            material: index(MATERIAL_COLUMN),
            numeric: schema
                .fields()
                .iter()
                .map(|field| index(field.as_str()))
                .collect(),
        })
    }
}

fn build_row(
    record: &RawRecord,
    columns: &ColumnMap,
    schema: &FieldSchema,
    warnings: &mut Vec<CoercionWarning>,
) -> Row {
    let values = columns
        .numeric
        .iter()
        .zip(schema.fields())
        .map(|(&index, field)| {
            let raw = record.cell(index);
            let cell = coerce_numeric_cell(raw);
            if cell == NumericCell::Invalid {
                warnings.push(CoercionWarning {
                    line: record.line,
                    column: field.clone(),
                    raw: raw.to_owned(),
                });
            }
            cell.value()
        })
        .collect();

    Row::new(
        text_cell(record, columns.category),
        text_cell(record, columns.standard),
        text_cell(record, columns.material),
    )
    .with_values(values)
}

/// Text attribute with missing markers folded to empty.
fn text_cell(record: &RawRecord, index: usize) -> &str {
    let raw = record.cell(index);
    if is_missing_marker(raw) { "" } else { raw }
}

#[cfg(feature = "remote-source")]
fn fetch_remote(url: &str) -> ExplorerResult<String> {
    let unreachable = |e: reqwest::Error| ExplorerError::SourceUnreachable {
        source_name: url.to_owned(),
        reason: e.to_string(),
    };
    reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(unreachable)?
        .text()
        .map_err(unreachable)
}

#[cfg(not(feature = "remote-source"))]
fn fetch_remote(url: &str) -> ExplorerResult<String> {
    Err(ExplorerError::RemoteSourceDisabled {
        url: url.to_owned(),
    })
}
