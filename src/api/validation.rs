use crate::core::FieldSchema;
use crate::error::{ExplorerError, ExplorerResult};

/// Clearing the standard is always allowed; a value must be offered.
pub(super) fn validate_standard_choice(
    standard: Option<&str>,
    options: &[String],
) -> ExplorerResult<()> {
    match standard {
        Some(value) if !value.is_empty() && !options.iter().any(|option| option == value) => {
            Err(ExplorerError::InvalidEvent(format!(
                "standard `{value}` is not available for the current category"
            )))
        }
        _ => Ok(()),
    }
}

pub(super) fn validate_axis_field(schema: &FieldSchema, field: &str) -> ExplorerResult<()> {
    if schema.contains(field) {
        Ok(())
    } else {
        Err(ExplorerError::InvalidEvent(format!(
            "axis field `{field}` is not a numeric field"
        )))
    }
}
