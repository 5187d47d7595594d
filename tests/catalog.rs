//! 카탈로그 검증 테스트. 구조가 잘못된 레코드는 로드 단계에서 거부되어야 한다.
use heat_loss_toolbox::heat_pump::{
    load_catalog_file, load_catalog_json, CatalogError, ProductFamily,
};
use std::path::Path;

fn record(body: &str) -> String {
    format!(
        r#"[{{ "name": "X", "tags": ["air-water"], "emitter_temp_range": {{ "min_c": 25.0, "max_c": 55.0 }}{body} }}]"#
    )
}

const MODELS: &str = r#", "power_models": [{ "model_id": "X10", "calorific_power_kw": 10.0 }]"#;
const CASCADE: &str = r#", "cascade": { "increment_kw": 5.0, "min_power_kw": 40.0, "max_power_kw": 400.0,
    "base_model_name": "X", "avg_frigo_ratio": 0.8, "avg_absorbed_ratio": 0.25, "avg_cop": 3.9, "avg_etas": 160.0 }"#;

#[test]
fn discrete_and_cascade_records_load() {
    let discrete = load_catalog_json(&record(MODELS)).expect("discrete");
    assert!(matches!(discrete[0].family, ProductFamily::Discrete { .. }));
    assert!(discrete[0].has_tag("Air-Water"));

    let cascade = load_catalog_json(&record(CASCADE)).expect("cascade");
    assert!(matches!(cascade[0].family, ProductFamily::Cascade(_)));
}

#[test]
fn record_without_power_spec_is_rejected() {
    let err = load_catalog_json(&record("")).unwrap_err();
    assert!(matches!(err, CatalogError::MissingPowerSpec { ref name } if name == "X"));
    assert!(err.to_string().contains("'X'"));
}

#[test]
fn record_with_both_power_specs_is_rejected() {
    let body = format!("{MODELS}{CASCADE}");
    let err = load_catalog_json(&record(&body)).unwrap_err();
    assert!(matches!(err, CatalogError::AmbiguousPowerSpec { .. }));
}

#[test]
fn empty_model_list_is_rejected() {
    let err = load_catalog_json(&record(r#", "power_models": []"#)).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyModelList { .. }));
}

#[test]
fn invalid_cascade_parameters_are_rejected() {
    let zero_inc = CASCADE.replace(r#""increment_kw": 5.0"#, r#""increment_kw": 0.0"#);
    let err = load_catalog_json(&record(&zero_inc)).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidIncrement { .. }));

    let inverted = CASCADE.replace(r#""min_power_kw": 40.0"#, r#""min_power_kw": 500.0"#);
    let err = load_catalog_json(&record(&inverted)).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidPowerRange { .. }));
}

#[test]
fn inverted_emitter_range_is_rejected() {
    let json = record(MODELS).replace(r#""min_c": 25.0"#, r#""min_c": 80.0"#);
    let err = load_catalog_json(&json).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidEmitterRange { .. }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = load_catalog_json("{ not json").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn negative_model_values_are_clamped() {
    let body = r#", "power_models": [{ "model_id": "N", "calorific_power_kw": 10.0, "cop": -1.0 }]"#;
    let entries = load_catalog_json(&record(body)).expect("catalog");
    match &entries[0].family {
        ProductFamily::Discrete { power_models } => assert_eq!(power_models[0].cop, 0.0),
        other => panic!("unexpected family {other:?}"),
    }
}

#[test]
fn demo_catalog_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/catalog.json");
    let entries = load_catalog_file(&path).expect("demo catalog");
    assert!(!entries.is_empty());
}
