pub mod coercion;
pub mod provider;
pub mod snapshot;
pub mod table;

pub use coercion::{
    CoercionWarning, MISSING_MARKERS, NumericCell, coerce_numeric_cell, is_missing_marker,
    normalize_numeric_text,
};
pub use provider::{
    DatasetProvider, DatasetSource, LoadReport, MATERX_DATASET_URL, SourceProvider, TextProvider,
    load, load_from_str,
};
pub use table::{RawRecord, RawTable, parse_table};
