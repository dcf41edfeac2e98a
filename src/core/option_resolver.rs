use std::collections::BTreeSet;

use crate::core::{Dataset, FieldSchema, Row};

/// Distinct non-missing categories, sorted ascending.
#[must_use]
pub fn resolve_category_options(dataset: &Dataset) -> Vec<String> {
    sorted_distinct(dataset.rows().iter().filter_map(|row| row.category.as_deref()))
}

/// Distinct standards available under `category`, sorted ascending.
///
/// `None` (or an empty string) means "no constraint", so every row
/// contributes. Rows without a standard never contribute.
#[must_use]
pub fn resolve_standard_options(dataset: &Dataset, category: Option<&str>) -> Vec<String> {
    let category = active_filter(category);
    sorted_distinct(
        dataset
            .rows()
            .iter()
            .filter(|row| matches_filter(row.category.as_deref(), category))
            .filter_map(|row| row.standard.as_deref()),
    )
}

/// Distinct materials matching `standard` AND `category`, unioned with the
/// current selection, sorted ascending.
///
/// The union keeps already selected materials listed even when the active
/// filters exclude them, so the option list never shrinks below the
/// selection.
#[must_use]
pub fn resolve_material_options<I>(
    dataset: &Dataset,
    standard: Option<&str>,
    category: Option<&str>,
    selected: I,
) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let standard = active_filter(standard);
    let category = active_filter(category);

    let mut options: BTreeSet<String> = dataset
        .rows()
        .iter()
        .filter(|row| row_matches(row, standard, category))
        .filter_map(|row| row.material.clone())
        .collect();
    options.extend(selected.into_iter().map(|m| m.as_ref().to_owned()));
    options.into_iter().collect()
}

/// Axis choices in schema order.
#[must_use]
pub fn resolve_axis_options(schema: &FieldSchema) -> Vec<String> {
    schema.fields().to_vec()
}

fn row_matches(row: &Row, standard: Option<&str>, category: Option<&str>) -> bool {
    matches_filter(row.standard.as_deref(), standard)
        && matches_filter(row.category.as_deref(), category)
}

fn matches_filter(value: Option<&str>, filter: Option<&str>) -> bool {
    match filter {
        Some(expected) => value == Some(expected),
        None => true,
    }
}

fn active_filter(filter: Option<&str>) -> Option<&str> {
    filter.filter(|value| !value.is_empty())
}

fn sorted_distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}
