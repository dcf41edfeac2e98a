pub mod option_resolver;
pub mod schema;
pub mod selection_reconciler;
pub mod series_projector;
pub mod types;

pub use option_resolver::{
    resolve_axis_options, resolve_category_options, resolve_material_options,
    resolve_standard_options,
};
pub use schema::{
    CATEGORY_COLUMN, DEFAULT_NUMERIC_FIELDS, FieldSchema, MATERIAL_COLUMN, SCHEMA_VERSION,
    STANDARD_COLUMN,
};
pub use selection_reconciler::reconcile_standard;
pub use series_projector::{Series, project_series};
pub use types::{DataPoint, Dataset, Row};
