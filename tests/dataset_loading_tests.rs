use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use materx_explorer::ExplorerError;
use materx_explorer::core::{
    DEFAULT_NUMERIC_FIELDS, FieldSchema, resolve_category_options, resolve_material_options,
    resolve_standard_options,
};
use materx_explorer::data::{
    DatasetProvider, DatasetSource, SourceProvider, TextProvider, load, load_from_str,
};

static UNIQUE_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn small_schema() -> FieldSchema {
    FieldSchema::new(["Elastic Modulus", "Mass Density", "Price"]).expect("schema")
}

fn temp_csv(contents: &str) -> PathBuf {
    let seq = UNIQUE_COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut path = std::env::temp_dir();
    path.push(format!(
        "materx_loading_{}_{seq}.csv",
        std::process::id()
    ));
    fs::write(&path, contents).expect("write temp csv");
    path
}

const SMALL_CSV: &str = "\
Category,Standard,Material,Elastic Modulus,Mass Density,Price,Notes
Metal,ASTM,Steel-A36,\"200,000\",7850,\"1,234\",structural
Metal,ASTM,Al-6061,6.9E4,2700,N/A,
Polymer,,PEEK,3600,1320,,high temp
";

#[test]
fn loads_rows_and_coerces_numeric_columns() {
    let report = load_from_str(SMALL_CSV, small_schema()).expect("load");
    let dataset = &report.dataset;
    assert_eq!(dataset.len(), 3);

    let steel = &dataset.rows()[0];
    assert_eq!(steel.category.as_deref(), Some("Metal"));
    assert_eq!(steel.material.as_deref(), Some("Steel-A36"));
    assert_eq!(dataset.value(steel, "Elastic Modulus"), Some(200_000.0));
    assert_eq!(dataset.value(steel, "Price"), Some(1_234.0));

    let aluminium = &dataset.rows()[1];
    assert_eq!(dataset.value(aluminium, "Elastic Modulus"), Some(69_000.0));
    assert_eq!(dataset.value(aluminium, "Price"), None);

    let peek = &dataset.rows()[2];
    assert_eq!(peek.standard, None);
    assert_eq!(dataset.value(peek, "Price"), None);
}

#[test]
fn only_unparseable_cells_produce_warnings() {
    let report = load_from_str(SMALL_CSV, small_schema()).expect("load");
    assert_eq!(report.warnings.len(), 1);
    let warning = &report.warnings[0];
    assert_eq!(warning.line, 3);
    assert_eq!(warning.column, "Price");
    assert_eq!(warning.raw, "N/A");
}

#[test]
fn missing_required_columns_fail_the_load() {
    let csv = "Category,Material,Elastic Modulus\nMetal,Steel,1\n";
    let err = load_from_str(csv, small_schema()).expect_err("missing columns");
    match &err {
        ExplorerError::MissingColumns { columns } => {
            assert_eq!(columns, &vec!["Standard", "Mass Density", "Price"]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.is_load_error());
}

#[test]
fn full_materx_header_is_accepted() {
    let mut header = vec!["Category", "Standard", "Material"];
    header.extend(DEFAULT_NUMERIC_FIELDS);
    let mut row = vec!["Metal", "ASTM", "Steel-A36"];
    row.extend(std::iter::repeat_n("1", DEFAULT_NUMERIC_FIELDS.len()));
    let csv = format!("{}\n{}\n", header.join(","), row.join(","));

    let report = load_from_str(&csv, FieldSchema::materx()).expect("load");
    let steel = &report.dataset.rows()[0];
    assert_eq!(steel.values.len(), DEFAULT_NUMERIC_FIELDS.len());
    assert!(steel.values.iter().all(|value| *value == Some(1.0)));
}

#[test]
fn header_without_rows_loads_an_empty_dataset() {
    let report = load_from_str(
        "Category,Standard,Material,Elastic Modulus,Mass Density,Price\n",
        small_schema(),
    )
    .expect("load");
    assert!(report.dataset.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn loads_from_a_file_path() {
    let path = temp_csv(SMALL_CSV);
    let report = load(&DatasetSource::Path(path.clone()), small_schema()).expect("load");
    assert_eq!(report.dataset.len(), 3);
    fs::remove_file(path).ok();
}

#[test]
fn missing_file_is_unreachable() {
    let source = DatasetSource::parse("/definitely/not/here/materx.csv");
    let err = load(&source, small_schema()).expect_err("missing file");
    assert!(matches!(err, ExplorerError::SourceUnreachable { .. }));
}

#[test]
fn source_locations_are_classified() {
    assert_eq!(
        DatasetSource::parse("https://example.com/materx.csv"),
        DatasetSource::Url("https://example.com/materx.csv".to_owned())
    );
    assert_eq!(
        DatasetSource::parse(" data/materx.csv "),
        DatasetSource::Path(PathBuf::from("data/materx.csv"))
    );
}

#[test]
fn providers_share_the_loading_path() {
    let path = temp_csv(SMALL_CSV);
    let from_file = SourceProvider::new(DatasetSource::Path(path.clone()), small_schema())
        .load()
        .expect("file provider");
    let from_text = TextProvider::new(SMALL_CSV, small_schema())
        .load()
        .expect("text provider");
    assert_eq!(from_file.dataset.rows(), from_text.dataset.rows());
    fs::remove_file(path).ok();
}

#[test]
fn missing_markers_in_text_columns_are_missing_values() {
    let csv = "\
Category,Standard,Material,Elastic Modulus,Mass Density,Price
Metal,ASTM,Steel,1,2,3
N/A,NA,nan,1,2,3
Metal,null,<NA>,4,5,6
";
    let report = load_from_str(csv, small_schema()).expect("load");
    let dataset = &report.dataset;
    assert_eq!(dataset.len(), 3);

    let marked = &dataset.rows()[1];
    assert_eq!(marked.category, None);
    assert_eq!(marked.standard, None);
    assert_eq!(marked.material, None);

    assert_eq!(resolve_category_options(dataset), vec!["Metal".to_owned()]);
    assert_eq!(
        resolve_standard_options(dataset, None),
        vec!["ASTM".to_owned()]
    );
    assert_eq!(
        resolve_material_options(dataset, None, None, Vec::<String>::new()),
        vec!["Steel".to_owned()]
    );
}

#[test]
fn missing_markers_match_exactly() {
    let csv = "\
Category,Standard,Material,Elastic Modulus,Mass Density,Price
Metal,ASTM, NA ,1,2,3
";
    let report = load_from_str(csv, small_schema()).expect("load");
    assert_eq!(report.dataset.rows()[0].material.as_deref(), Some(" NA "));
}

#[test]
fn headers_with_spaces_after_commas_load() {
    let csv = "Category, Standard, Material, Elastic Modulus, Mass Density, Price\nMetal,ASTM,Steel,1,2,3\n";
    let report = load_from_str(csv, small_schema()).expect("load");
    let steel = &report.dataset.rows()[0];
    assert_eq!(steel.material.as_deref(), Some("Steel"));
    assert_eq!(report.dataset.value(steel, "Mass Density"), Some(2.0));
}
