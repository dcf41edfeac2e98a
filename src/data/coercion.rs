use serde::{Deserialize, Serialize};

/// Outcome of coercing one raw numeric cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericCell {
    Value(f64),
    /// Empty source cell; missing without a warning.
    Empty,
    /// Text that is still not a finite number after normalization.
    Invalid,
}

impl NumericCell {
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(value),
            Self::Empty | Self::Invalid => None,
        }
    }
}

/// Non-fatal note that a numeric cell was stored as missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoercionWarning {
    /// 1-based source line of the record.
    pub line: usize,
    pub column: String,
    pub raw: String,
}

/// Text-column cells read as missing, the usual CSV NA spellings.
pub const MISSING_MARKERS: [&str; 19] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null", "",
];

/// `true` when a raw cell spells a missing value. Matching is exact.
#[must_use]
pub fn is_missing_marker(raw: &str) -> bool {
    MISSING_MARKERS.contains(&raw)
}

/// Strips thousands separators and lower-cases exponent markers.
#[must_use]
pub fn normalize_numeric_text(raw: &str) -> String {
    raw.trim().replace(',', "").replace('E', "e")
}

/// Coerces a raw cell such as `"1,234"` or `"2.1E5"` into a number.
///
/// Non-finite parses (`inf`, `NaN`) count as invalid so they never reach a
/// plotted series.
#[must_use]
pub fn coerce_numeric_cell(raw: &str) -> NumericCell {
    let normalized = normalize_numeric_text(raw);
    if normalized.is_empty() {
        return NumericCell::Empty;
    }
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => NumericCell::Value(value),
        _ => NumericCell::Invalid,
    }
}
