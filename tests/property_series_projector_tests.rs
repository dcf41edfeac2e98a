use materx_explorer::core::{Dataset, FieldSchema, Row, project_series};
use proptest::prelude::*;

const MATERIALS: [&str; 4] = ["Steel-A36", "S235", "PEEK", "Alumina"];
const FIELDS: [&str; 3] = ["Elastic Modulus", "Mass Density", "Price"];

fn value() -> impl Strategy<Value = Option<f64>> {
    proptest::option::of(-1.0e6f64..1.0e6)
}

fn rows() -> impl Strategy<Value = Vec<(usize, Option<f64>, Option<f64>, Option<f64>)>> {
    proptest::collection::vec((0..MATERIALS.len(), value(), value(), value()), 0..64)
}

fn dataset_from(rows: &[(usize, Option<f64>, Option<f64>, Option<f64>)]) -> Dataset {
    let schema = FieldSchema::new(FIELDS).expect("schema");
    let rows = rows
        .iter()
        .map(|&(m, a, b, c)| Row::new("Metal", "ASTM", MATERIALS[m]).with_values(vec![a, b, c]))
        .collect();
    Dataset::new(schema, rows)
}

proptest! {
    #[test]
    fn empty_selection_is_empty_for_any_axes(
        rows in rows(),
        x in 0..FIELDS.len(),
        y in 0..FIELDS.len(),
    ) {
        let dataset = dataset_from(&rows);
        let none: Vec<String> = Vec::new();
        prop_assert!(project_series(&dataset, &none, FIELDS[x], FIELDS[y]).is_empty());
    }

    #[test]
    fn one_series_per_selected_material_with_only_complete_points(
        rows in rows(),
        selection in proptest::sample::subsequence(MATERIALS.to_vec(), 0..=MATERIALS.len()),
        x in 0..FIELDS.len(),
        y in 0..FIELDS.len(),
    ) {
        let dataset = dataset_from(&rows);
        let series = project_series(&dataset, &selection, FIELDS[x], FIELDS[y]);

        prop_assert_eq!(series.len(), selection.len());
        for (entry, material) in series.iter().zip(&selection) {
            prop_assert_eq!(entry.label.as_str(), *material);
            let expected = dataset
                .rows()
                .iter()
                .filter(|row| row.material.as_deref() == Some(*material))
                .filter(|row| row.value(x).is_some() && row.value(y).is_some())
                .count();
            prop_assert_eq!(entry.points.len(), expected);
            for point in &entry.points {
                prop_assert!(point.x.is_finite() && point.y.is_finite());
            }
        }
    }

    #[test]
    fn projection_is_idempotent(
        rows in rows(),
        selection in proptest::sample::subsequence(MATERIALS.to_vec(), 0..=MATERIALS.len()),
        x in 0..FIELDS.len(),
        y in 0..FIELDS.len(),
    ) {
        let dataset = dataset_from(&rows);
        let first = project_series(&dataset, &selection, FIELDS[x], FIELDS[y]);
        let second = project_series(&dataset, &selection, FIELDS[x], FIELDS[y]);
        prop_assert_eq!(first, second);
    }
}
