//! 히트펌프 제품 선정 테스트.
use approx::assert_abs_diff_eq;
use heat_loss_toolbox::heat_pump::{
    cascade_model, load_catalog_json, match_compatible_products, round_up_to_increment,
    CascadeSpec, CatalogEntry, EmitterType, MatchPreferences, Rejection, OVERSIZING_LIMIT,
};

const CATALOG: &str = r#"[
  {
    "name": "Alpha",
    "tags": ["air-water", "monobloc", "R32"],
    "emitter_temp_range": { "min_c": 25.0, "max_c": 55.0 },
    "power_models": [
      { "model_id": "A22", "calorific_power_kw": 22.0, "frigorific_power_kw": 19.0, "absorbed_power_kw": 5.5, "cop": 4.0, "etas": 175.0 },
      { "model_id": "A10", "calorific_power_kw": 10.0, "frigorific_power_kw": 8.5, "absorbed_power_kw": 2.4, "cop": 4.2, "etas": 180.0 },
      { "model_id": "A18", "calorific_power_kw": 18.0, "frigorific_power_kw": 15.5, "absorbed_power_kw": 4.4, "cop": 4.1, "etas": 178.0 },
      { "model_id": "A14", "calorific_power_kw": 14.0, "frigorific_power_kw": 12.0, "absorbed_power_kw": 3.4, "cop": 4.1, "etas": 179.0 }
    ]
  },
  {
    "name": "Cascade",
    "tags": ["air-water", "monobloc"],
    "emitter_temp_range": { "min_c": 25.0, "max_c": 65.0 },
    "cascade": {
      "increment_kw": 5.0,
      "min_power_kw": 40.0,
      "max_power_kw": 400.0,
      "base_model_name": "CASC",
      "avg_frigo_ratio": 0.8,
      "avg_absorbed_ratio": 0.25,
      "avg_cop": 3.9,
      "avg_etas": 160.0
    }
  },
  {
    "name": "Big",
    "tags": ["air-water", "monobloc"],
    "emitter_temp_range": { "min_c": 25.0, "max_c": 60.0 },
    "power_models": [
      { "model_id": "B60", "calorific_power_kw": 60.0 },
      { "model_id": "B30", "calorific_power_kw": 30.0 },
      { "model_id": "B45", "calorific_power_kw": 45.0 }
    ]
  },
  {
    "name": "Split",
    "tags": ["air-water", "split"],
    "emitter_temp_range": { "min_c": 25.0, "max_c": 55.0 },
    "power_models": [
      { "model_id": "S20", "calorific_power_kw": 20.0 }
    ]
  },
  {
    "name": "Hot",
    "tags": ["air-water", "monobloc"],
    "emitter_temp_range": { "min_c": 55.0, "max_c": 75.0 },
    "power_models": [
      { "model_id": "H20", "calorific_power_kw": 20.0 }
    ]
  }
]"#;

fn catalog() -> Vec<CatalogEntry> {
    load_catalog_json(CATALOG).expect("catalog")
}

fn prefs() -> MatchPreferences {
    MatchPreferences::new("air-water", "monobloc", 45.0)
}

fn names(results: &[heat_loss_toolbox::heat_pump::MatchResult<'_>]) -> Vec<String> {
    results.iter().map(|r| r.entry.name.clone()).collect()
}

#[test]
fn discrete_models_sorted_with_smallest_default() {
    let catalog = catalog();
    let res = match_compatible_products(&catalog, 16.88, &prefs());
    assert_eq!(names(&res), vec!["Alpha"]);
    let powers: Vec<f64> = res[0]
        .compatible_models
        .iter()
        .map(|m| m.calorific_power_kw)
        .collect();
    assert_eq!(powers, vec![18.0, 22.0]);
    assert_eq!(res[0].default_model.calorific_power_kw, 18.0);
    assert_eq!(res[0].default_model.model_id, "A18");
}

#[test]
fn oversized_family_is_excluded() {
    let catalog = catalog();
    // Big의 최소 모델 30 kW > 1.5 × 16.88
    let res = match_compatible_products(&catalog, 16.88, &prefs());
    assert!(res.iter().all(|r| r.entry.name != "Big"));

    // 1.5배 경계: 30 kW = 1.5 × 20 kW 이면 제외되지 않는다
    let res = match_compatible_products(&catalog, 20.0, &prefs());
    let big = res.iter().find(|r| r.entry.name == "Big").expect("Big kept");
    assert_eq!(big.default_model.calorific_power_kw, 30.0);
}

#[test]
fn cascade_rounding() {
    let catalog = catalog();
    let res = match_compatible_products(&catalog, 42.0, &prefs());
    // 카탈로그 순서 유지, Alpha는 42 kW 이상 모델이 없어 제외
    assert_eq!(names(&res), vec!["Cascade", "Big"]);

    let cascade = &res[0];
    assert_eq!(cascade.compatible_models.len(), 1);
    let model = &cascade.default_model;
    assert_eq!(model.calorific_power_kw, 45.0);
    assert_eq!(model.model_id, "CASC - 45 KW");
    assert_abs_diff_eq!(model.frigorific_power_kw, 36.0, epsilon = 1e-9);
    assert_abs_diff_eq!(model.absorbed_power_kw, 11.25, epsilon = 1e-9);
    assert_eq!(model.cop, 3.9);
    assert_eq!(model.etas, 160.0);

    let big: Vec<f64> = res[1]
        .compatible_models
        .iter()
        .map(|m| m.calorific_power_kw)
        .collect();
    assert_eq!(big, vec![45.0, 60.0]);
}

#[test]
fn cascade_below_minimum_is_rejected() {
    let spec = CascadeSpec {
        increment_kw: 5.0,
        min_power_kw: 40.0,
        max_power_kw: 400.0,
        base_model_name: "CASC".into(),
        avg_frigo_ratio: 0.8,
        avg_absorbed_ratio: 0.25,
        avg_cop: 3.9,
        avg_etas: 160.0,
    };
    assert_eq!(
        cascade_model(&spec, 16.88),
        Err(Rejection::CascadeOutOfRange {
            rounded_kw: 20.0,
            min_kw: 40.0,
            max_kw: 400.0,
        })
    );
    assert!(cascade_model(&spec, 401.0).is_err());
    assert_eq!(cascade_model(&spec, 40.0).expect("40").calorific_power_kw, 40.0);
    assert_eq!(cascade_model(&spec, 400.0).expect("400").calorific_power_kw, 400.0);
}

#[test]
fn round_up_keeps_exact_multiples() {
    assert_eq!(round_up_to_increment(42.0, 5.0), 45.0);
    assert_eq!(round_up_to_increment(45.0, 5.0), 45.0);
    assert_eq!(round_up_to_increment(16.88, 5.0), 20.0);
    assert_eq!(round_up_to_increment(0.0, 5.0), 0.0);
    assert_eq!(round_up_to_increment(f64::NAN, 5.0), 0.0);
}

#[test]
fn tags_and_emitter_range_filter_entries() {
    let catalog = catalog();

    let split = MatchPreferences::new("air-water", "split", 45.0);
    assert_eq!(names(&match_compatible_products(&catalog, 16.88, &split)), vec!["Split"]);

    let upper_case = MatchPreferences::new("AIR-WATER", " Monobloc ", 45.0);
    assert_eq!(names(&match_compatible_products(&catalog, 16.88, &upper_case)), vec!["Alpha"]);

    // 범위 양 끝 포함: Alpha(최대 55)와 Hot(최소 55) 모두 통과
    let at_edge = MatchPreferences::new("air-water", "monobloc", 55.0);
    assert_eq!(
        names(&match_compatible_products(&catalog, 16.88, &at_edge)),
        vec!["Alpha", "Hot"]
    );

    let too_hot = MatchPreferences::new("air-water", "monobloc", 70.0);
    assert_eq!(names(&match_compatible_products(&catalog, 16.88, &too_hot)), vec!["Hot"]);
}

#[test]
fn refrigerant_tag_is_optional_filter() {
    let catalog = catalog();
    let r32 = MatchPreferences {
        refrigerant_tag: Some("r32".into()),
        ..prefs()
    };
    assert_eq!(names(&match_compatible_products(&catalog, 42.0, &r32)), Vec::<String>::new());
    assert_eq!(names(&match_compatible_products(&catalog, 12.0, &r32)), vec!["Alpha"]);
}

#[test]
fn emitter_type_supplies_default_temperature() {
    let catalog = catalog();
    let underfloor = MatchPreferences {
        emitter: EmitterType::UnderfloorHeating,
        emitter_temp_c: None,
        ..prefs()
    };
    assert_eq!(underfloor.operating_temp_c(), 35.0);
    assert_eq!(names(&match_compatible_products(&catalog, 16.88, &underfloor)), vec!["Alpha"]);

    let radiator = MatchPreferences {
        emitter: EmitterType::HighTemperatureRadiator,
        emitter_temp_c: None,
        ..prefs()
    };
    assert_eq!(names(&match_compatible_products(&catalog, 16.88, &radiator)), vec!["Hot"]);
}

#[test]
fn no_match_is_an_empty_list() {
    let catalog = catalog();
    let geo = MatchPreferences::new("ground-water", "monobloc", 45.0);
    assert!(match_compatible_products(&catalog, 16.88, &geo).is_empty());
    assert!(match_compatible_products(&[], 16.88, &prefs()).is_empty());
    // 필요 출력 0이면 모든 개별 모델이 과대 용량
    assert!(match_compatible_products(&catalog, 0.0, &prefs()).is_empty());
}

fn cascade_spec(increment_kw: f64, min_power_kw: f64, max_power_kw: f64) -> CascadeSpec {
    CascadeSpec {
        increment_kw,
        min_power_kw,
        max_power_kw,
        base_model_name: "C".into(),
        avg_frigo_ratio: 0.8,
        avg_absorbed_ratio: 0.25,
        avg_cop: 3.9,
        avg_etas: 160.0,
    }
}

#[test]
fn fractional_increment_lands_on_grid() {
    assert_eq!(round_up_to_increment(16.88, 0.1), 16.9);
    assert_eq!(round_up_to_increment(1.1, 0.1), 1.1);
    assert_eq!(round_up_to_increment(0.3, 0.1), 0.3);

    // 최대 출력과 같은 값은 범위 안
    let at_max = cascade_model(&cascade_spec(0.1, 1.0, 16.9), 16.88).expect("16.9 kW");
    assert_eq!(at_max.calorific_power_kw, 16.9);

    let model = cascade_model(&cascade_spec(0.1, 1.0, 400.0), 16.88).expect("model");
    assert_eq!(model.model_id, "C - 16.9 KW");
}

#[test]
fn value_just_above_multiple_rounds_up() {
    assert_eq!(round_up_to_increment(40.000000001, 5.0), 45.0);
    let model = cascade_model(&cascade_spec(5.0, 40.0, 400.0), 40.000000001).expect("model");
    assert_eq!(model.calorific_power_kw, 45.0);
    assert_eq!(model.model_id, "C - 45 KW");
}

#[test]
fn oversized_reason_names_the_limit() {
    let msg = Rejection::Oversized { smallest_kw: 30.0 }.to_string();
    assert!(msg.contains("30"));
    assert!(msg.contains(&OVERSIZING_LIMIT.to_string()));
}
