use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::catalog::{CascadeSpec, CatalogEntry, PowerModel, ProductFamily};
use crate::thermal::sanitize;

/// 최소 모델 출력이 필요 출력의 이 배수를 넘으면 과대 용량으로 제외한다.
pub const OVERSIZING_LIMIT: f64 = 1.5;

categorical! {
    /// 실내 방열 방식.
    pub enum EmitterType (fallback = HighTemperatureRadiator) {
        HighTemperatureRadiator => "high-temperature-radiator",
        LowTemperatureRadiator => "low-temperature-radiator",
        UnderfloorHeating => "underfloor-heating",
        FanCoil => "fan-coil",
    }
}

impl EmitterType {
    /// 운전 온도를 따로 주지 않았을 때 쓰는 공급 온도 [°C]
    pub fn default_temp_c(self) -> f64 {
        match self {
            EmitterType::HighTemperatureRadiator => 65.0,
            EmitterType::LowTemperatureRadiator => 45.0,
            EmitterType::UnderfloorHeating => 35.0,
            EmitterType::FanCoil => 45.0,
        }
    }
}

/// 제품 선정 조건.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPreferences {
    /// 필수 종류 태그 (예: "air-water")
    pub type_tag: String,
    /// 필수 시스템 태그 (예: "monobloc")
    pub system_tag: String,
    #[serde(default)]
    pub emitter: EmitterType,
    /// 방열기 운전 온도 [°C]. 없으면 방열 방식 기본값.
    #[serde(default)]
    pub emitter_temp_c: Option<f64>,
    /// 냉매 태그 (예: "r32"). 지정 시 추가로 일치해야 한다.
    #[serde(default)]
    pub refrigerant_tag: Option<String>,
}

impl MatchPreferences {
    pub fn new(
        type_tag: impl Into<String>,
        system_tag: impl Into<String>,
        emitter_temp_c: f64,
    ) -> Self {
        Self {
            type_tag: type_tag.into(),
            system_tag: system_tag.into(),
            emitter: EmitterType::default(),
            emitter_temp_c: Some(emitter_temp_c),
            refrigerant_tag: None,
        }
    }

    pub fn operating_temp_c(&self) -> f64 {
        self.emitter_temp_c
            .filter(|t| t.is_finite())
            .unwrap_or_else(|| self.emitter.default_temp_c())
    }
}

/// 조건을 만족한 카탈로그 항목과 선택 가능한 모델.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub entry: &'a CatalogEntry,
    /// 필요 출력 이상인 모델, 난방 출력 오름차순
    pub compatible_models: Vec<PowerModel>,
    /// 가장 작은(과대 용량이 가장 적은) 모델
    pub default_model: PowerModel,
}

/// 항목이 제외된 이유. 로그에만 쓰이며 오류가 아니다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("필수 태그 '{0}' 없음")]
    MissingTag(String),
    #[error("방열기 온도 {temp_c} °C가 허용 범위 {min_c}..={max_c} °C 밖")]
    EmitterOutOfRange { temp_c: f64, min_c: f64, max_c: f64 },
    #[error("최소 모델 {smallest_kw} kW가 필요 출력의 {limit}배 초과", limit = OVERSIZING_LIMIT)]
    Oversized { smallest_kw: f64 },
    #[error("필요 출력에 도달하는 모델 없음")]
    NoModelLargeEnough,
    #[error("캐스케이드 출력 {rounded_kw} kW가 허용 범위 {min_kw}..={max_kw} kW 밖")]
    CascadeOutOfRange {
        rounded_kw: f64,
        min_kw: f64,
        max_kw: f64,
    },
}

/// 출력 값을 맞추는 격자 [1/kW]. 1e-9 kW 미만의 부동소수점 잔차를 없앤다.
const POWER_RESOLUTION_PER_KW: f64 = 1e9;

fn snap_to_resolution(kw: f64) -> f64 {
    let scaled = (kw * POWER_RESOLUTION_PER_KW).round();
    if scaled.is_finite() {
        scaled / POWER_RESOLUTION_PER_KW
    } else {
        kw
    }
}

/// 값을 증분의 다음 배수로 올림한다. 이미 배수이면 그대로 둔다.
///
/// 결과는 1e-9 kW 격자에 맞춰지므로 `0.1` 같은 증분에서도 `16.9`가 그대로 나온다.
pub fn round_up_to_increment(value: f64, increment: f64) -> f64 {
    let value = sanitize(value);
    if !(increment > 0.0 && increment.is_finite()) {
        return value;
    }
    let mut steps = (value / increment).ceil();
    // 나눗셈 오차로 한 칸 더 올라간 경우
    if steps >= 1.0 && snap_to_resolution((steps - 1.0) * increment) >= value {
        steps -= 1.0;
    }
    snap_to_resolution(steps * increment)
}

/// 캐스케이드 제품에서 필요 출력에 맞는 모델 하나를 합성한다.
pub fn cascade_model(spec: &CascadeSpec, required_kw: f64) -> Result<PowerModel, Rejection> {
    let rounded = round_up_to_increment(required_kw, spec.increment_kw);
    if rounded < spec.min_power_kw || rounded > spec.max_power_kw {
        return Err(Rejection::CascadeOutOfRange {
            rounded_kw: rounded,
            min_kw: spec.min_power_kw,
            max_kw: spec.max_power_kw,
        });
    }
    Ok(PowerModel {
        model_id: format!("{} - {} KW", spec.base_model_name, rounded),
        calorific_power_kw: rounded,
        frigorific_power_kw: sanitize(rounded * spec.avg_frigo_ratio),
        absorbed_power_kw: sanitize(rounded * spec.avg_absorbed_ratio),
        cop: sanitize(spec.avg_cop),
        etas: sanitize(spec.avg_etas),
    })
}

/// 고정 모델 목록에서 필요 출력 이상인 모델을 오름차순으로 고른다.
pub fn discrete_models(
    models: &[PowerModel],
    required_kw: f64,
) -> Result<Vec<PowerModel>, Rejection> {
    let smallest = models
        .iter()
        .map(|m| m.calorific_power_kw)
        .fold(f64::INFINITY, f64::min);
    if smallest > OVERSIZING_LIMIT * required_kw {
        return Err(Rejection::Oversized {
            smallest_kw: smallest,
        });
    }
    let mut compatible: Vec<PowerModel> = models
        .iter()
        .filter(|m| m.calorific_power_kw >= required_kw)
        .cloned()
        .collect();
    compatible.sort_by(|a, b| a.calorific_power_kw.total_cmp(&b.calorific_power_kw));
    if compatible.is_empty() {
        return Err(Rejection::NoModelLargeEnough);
    }
    Ok(compatible)
}

fn check_filters(entry: &CatalogEntry, prefs: &MatchPreferences) -> Result<(), Rejection> {
    let required_tags = [
        Some(&prefs.type_tag),
        Some(&prefs.system_tag),
        prefs.refrigerant_tag.as_ref(),
    ];
    for tag in required_tags.into_iter().flatten() {
        if !entry.has_tag(tag) {
            return Err(Rejection::MissingTag(tag.clone()));
        }
    }
    let temp_c = prefs.operating_temp_c();
    let range = entry.emitter_temp_range;
    if !range.contains(temp_c) {
        return Err(Rejection::EmitterOutOfRange {
            temp_c,
            min_c: range.min_c,
            max_c: range.max_c,
        });
    }
    Ok(())
}

/// 카탈로그 항목 하나를 평가한다.
pub fn evaluate_entry<'a>(
    entry: &'a CatalogEntry,
    required_kw: f64,
    prefs: &MatchPreferences,
) -> Result<MatchResult<'a>, Rejection> {
    check_filters(entry, prefs)?;
    let required_kw = sanitize(required_kw);
    let compatible_models = match &entry.family {
        ProductFamily::Cascade(spec) => vec![cascade_model(spec, required_kw)?],
        ProductFamily::Discrete { power_models } => discrete_models(power_models, required_kw)?,
    };
    let default_model = compatible_models
        .first()
        .cloned()
        .ok_or(Rejection::NoModelLargeEnough)?;
    Ok(MatchResult {
        entry,
        compatible_models,
        default_model,
    })
}

/// 필요 출력과 선정 조건에 맞는 제품을 카탈로그 순서대로 돌려준다.
///
/// 맞는 제품이 없으면 빈 목록이며 오류가 아니다.
pub fn match_compatible_products<'a>(
    catalog: &'a [CatalogEntry],
    required_kw: f64,
    prefs: &MatchPreferences,
) -> Vec<MatchResult<'a>> {
    catalog
        .iter()
        .filter_map(|entry| match evaluate_entry(entry, required_kw, prefs) {
            Ok(result) => Some(result),
            Err(reason) => {
                tracing::debug!(product = %entry.name, %reason, "catalog entry rejected");
                None
            }
        })
        .collect()
}
