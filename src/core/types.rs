use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::FieldSchema;

/// Plain `(x, y)` sample in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One material record.
///
/// Text attributes are `None` when the source cell was empty. `values` is
/// indexed by the owning dataset's [`FieldSchema`]; `None` marks a value that
/// could not be coerced to a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub category: Option<String>,
    pub standard: Option<String>,
    pub material: Option<String>,
    pub values: Vec<Option<f64>>,
}

impl Row {
    /// Builds a row from text attributes; empty strings are stored as missing.
    #[must_use]
    pub fn new(category: &str, standard: &str, material: &str) -> Self {
        Self {
            category: non_empty(category),
            standard: non_empty(standard),
            material: non_empty(material),
            values: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_values(mut self, values: Vec<Option<f64>>) -> Self {
        self.values = values;
        self
    }

    /// Numeric value at a schema index, `None` when missing or out of range.
    #[must_use]
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

#[derive(Debug)]
struct DatasetInner {
    schema: FieldSchema,
    rows: Vec<Row>,
}

/// Immutable, cheaply cloneable material table.
///
/// Every row carries exactly `schema.len()` numeric slots: shorter value
/// lists are padded with missing values and longer ones are truncated.
#[derive(Debug, Clone)]
pub struct Dataset {
    inner: Arc<DatasetInner>,
}

impl Dataset {
    #[must_use]
    pub fn new(schema: FieldSchema, rows: Vec<Row>) -> Self {
        let width = schema.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.values.resize(width, None);
                row
            })
            .collect();
        Self {
            inner: Arc::new(DatasetInner { schema, rows }),
        }
    }

    #[must_use]
    pub fn schema(&self) -> &FieldSchema {
        &self.inner.schema
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.inner.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.rows.is_empty()
    }

    /// Looks up a row's value by field name.
    #[must_use]
    pub fn value(&self, row: &Row, field: &str) -> Option<f64> {
        self.inner
            .schema
            .index_of(field)
            .and_then(|index| row.value(index))
    }

    /// Returns `true` when both handles share the same underlying table.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
