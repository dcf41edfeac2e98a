use serde::Serialize;

use crate::error::{ExplorerError, ExplorerResult};

pub const SCHEMA_VERSION: u32 = 1;

pub const CATEGORY_COLUMN: &str = "Category";
pub const STANDARD_COLUMN: &str = "Standard";
pub const MATERIAL_COLUMN: &str = "Material";

/// Numeric property columns published by the MaterX table, in axis order.
pub const DEFAULT_NUMERIC_FIELDS: [&str; 14] = [
    "Elastic Modulus",
    "Shear Modulus",
    "Mass Density",
    "Tensile Strength",
    "Compressive Strength",
    "Yield Strength",
    "Thermal Expansion Coefficient",
    "Thermal Conductivity",
    "Specific Heat",
    "Material Damping Ratio",
    "Minimum Temperature",
    "Maximum Temperature",
    "Electricity Conductivity",
    "Price",
];

/// Versioned, ordered list of numeric fields.
///
/// Serves both as the coercion target list of the loader and as the axis
/// choice list of a session. Invariants:
/// - at least two fields
/// - every field name is non-empty and unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    version: u32,
    fields: Vec<String>,
}

impl FieldSchema {
    pub fn new<I, S>(fields: I) -> ExplorerResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.len() < 2 {
            return Err(ExplorerError::InvalidConfig(
                "numeric field list must hold at least two fields".to_owned(),
            ));
        }
        for (index, field) in fields.iter().enumerate() {
            if field.trim().is_empty() {
                return Err(ExplorerError::InvalidConfig(format!(
                    "numeric field #{index} must not be empty"
                )));
            }
            if fields[..index].contains(field) {
                return Err(ExplorerError::InvalidConfig(format!(
                    "numeric field `{field}` is listed more than once"
                )));
            }
        }
        Ok(Self {
            version: SCHEMA_VERSION,
            fields,
        })
    }

    /// The MaterX column list.
    #[must_use]
    pub fn materx() -> Self {
        Self {
            version: SCHEMA_VERSION,
            fields: DEFAULT_NUMERIC_FIELDS.iter().map(|f| (*f).to_owned()).collect(),
        }
    }

    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|candidate| candidate == field)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.index_of(field).is_some()
    }

    #[must_use]
    pub fn default_x_axis(&self) -> &str {
        &self.fields[0]
    }

    #[must_use]
    pub fn default_y_axis(&self) -> &str {
        &self.fields[1]
    }

    /// Every header the loader requires, text columns first.
    pub fn required_columns(&self) -> impl Iterator<Item = &str> {
        [CATEGORY_COLUMN, STANDARD_COLUMN, MATERIAL_COLUMN]
            .into_iter()
            .chain(self.fields.iter().map(String::as_str))
    }
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::materx()
    }
}
