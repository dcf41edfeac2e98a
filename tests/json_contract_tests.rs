use materx_explorer::ExplorerError;
use materx_explorer::api::{
    EXPLORER_VIEW_JSON_SCHEMA_V1, ExplorerSession, ExplorerView, InteractionEvent,
};
use materx_explorer::core::{Dataset, FieldSchema, Row};
use serde_json::Value;

fn session() -> ExplorerSession {
    let schema = FieldSchema::new(["Elastic Modulus", "Mass Density"]).expect("schema");
    let dataset = Dataset::new(
        schema,
        vec![
            Row::new("Metal", "ASTM", "Steel-A36").with_values(vec![Some(200_000.0), Some(7_850.0)]),
            Row::new("Polymer", "ISO", "PEEK").with_values(vec![Some(3_600.0), None]),
        ],
    );
    let mut session = ExplorerSession::new(dataset);
    session
        .dispatch(InteractionEvent::materials_changed(["PEEK", "Steel-A36"]))
        .expect("materials");
    session
}

#[test]
fn view_contract_carries_schema_version_and_derived_output() {
    let json = session().view_json_contract_v1_pretty().expect("serialize");
    let value: Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["schema_version"], EXPLORER_VIEW_JSON_SCHEMA_V1);
    assert_eq!(value["view"]["category_options"][0], "Metal");
    assert_eq!(value["view"]["selection"]["materials"][0], "PEEK");
    assert_eq!(value["view"]["selection"]["x_axis"], "Elastic Modulus");
    assert_eq!(value["view"]["series"][0]["label"], "PEEK");
    assert_eq!(
        value["view"]["series"][0]["points"]
            .as_array()
            .map(Vec::len),
        Some(0)
    );
    assert_eq!(value["view"]["series"][1]["points"][0]["x"], 200_000.0);
}

#[test]
fn compat_parser_accepts_envelope_and_bare_view() {
    let session = session();
    let view = session.view();

    let envelope = view.to_json_contract_v1_pretty().expect("serialize");
    assert_eq!(ExplorerView::from_json_compat_str(&envelope).expect("envelope"), view);

    let bare = serde_json::to_string(&view).expect("serialize bare");
    assert_eq!(ExplorerView::from_json_compat_str(&bare).expect("bare"), view);
}

#[test]
fn compat_parser_rejects_unknown_schema_version() {
    let json = session().view_json_contract_v1_pretty().expect("serialize");
    let mut value: Value = serde_json::from_str(&json).expect("valid json");
    value["schema_version"] = Value::from(2);

    let err = ExplorerView::from_json_compat_str(&value.to_string()).expect_err("version 2");
    assert!(matches!(err, ExplorerError::InvalidData(_)));
}

#[test]
fn figure_contract_is_versioned() {
    let json = session().figure_json_contract_v1_pretty().expect("serialize");
    let value: Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["figure"]["title"], "Mass Density vs Elastic Modulus");
    assert_eq!(value["figure"]["traces"][1]["name"], "Steel-A36");
}

#[test]
fn view_lists_selected_materials_in_display_order() {
    let schema = FieldSchema::new(["Elastic Modulus", "Mass Density"]).expect("schema");
    let dataset = Dataset::new(
        schema,
        vec![
            Row::new("Metal", "ASTM", "Titanium").with_values(vec![Some(110_000.0), Some(4_500.0)]),
            Row::new("Metal", "ASTM", "Brass").with_values(vec![Some(100_000.0), Some(8_500.0)]),
        ],
    );
    let mut session = ExplorerSession::new(dataset);
    session
        .dispatch(InteractionEvent::materials_changed(["Titanium", "Brass"]))
        .expect("materials");

    let view = session.view();
    assert_eq!(view.selected_materials, vec!["Brass", "Titanium"]);

    let json = session.view_json_contract_v1_pretty().expect("serialize");
    let value: Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["view"]["selection"]["materials"][0], "Titanium");
    assert_eq!(value["view"]["selected_materials"][0], "Brass");
}
