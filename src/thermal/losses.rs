//! 부위별 열손실 계산식. 모두 입력만으로 결정되는 순수 함수이며
//! 결과 단위는 W/K(온도차를 곱하기 전 값)이다.

use super::geometry::FloorGeometry;
use super::sanitize;
use super::survey::{AdvancedWallSpec, BuildingSurvey, SurveyMode};
use super::tables::YearBand;

/// 실내 표면 열저항 Rsi [m²·K/W]
pub const INTERIOR_SURFACE_RESISTANCE: f64 = 0.13;
/// 실외 표면 열저항 Rse [m²·K/W]
pub const EXTERIOR_SURFACE_RESISTANCE: f64 = 0.04;
/// 지붕 손실 보정 계수
pub const ROOF_CORRECTION: f64 = 0.8;
/// 공기 체적 열용량 계수 [Wh/m³·K]
pub const AIR_HEAT_CAPACITY: f64 = 0.34;

/// 벽체 구성으로부터 U값을 계산한다: `1 / (Rsi + Rse + Σ e/λ)`.
pub fn layered_wall_u_value(spec: &AdvancedWallSpec) -> f64 {
    let layers = std::iter::once(&spec.base)
        .chain(spec.interior_insulation.iter())
        .chain(spec.exterior_insulation.iter());
    let r_total = INTERIOR_SURFACE_RESISTANCE
        + EXTERIOR_SURFACE_RESISTANCE
        + layers.map(|l| l.resistance()).sum::<f64>();
    sanitize(1.0 / r_total)
}

/// 벽 U값. 상세 벽체 입력이 있으면 그것을, 없으면 연도 구간 값을 쓴다.
pub fn wall_u_value(survey: &BuildingSurvey) -> f64 {
    match &survey.advanced_wall {
        Some(spec) => layered_wall_u_value(spec),
        None => survey.year_band.values().wall_u,
    }
}

/// 불투명 벽 손실: 층별 불투명 면적 × 벽 U값의 합.
pub fn wall_loss(survey: &BuildingSurvey, floors: &[FloorGeometry]) -> f64 {
    let u = wall_u_value(survey);
    floors.iter().map(|g| g.opaque_m2 * u).sum::<f64>().max(0.0)
}

/// 창 손실: 전체 창 면적 × 창호 U값.
pub fn window_loss(survey: &BuildingSurvey, floors: &[FloorGeometry]) -> f64 {
    let glazed: f64 = floors.iter().map(|g| g.glazed_m2).sum();
    sanitize(glazed * survey.glazing_type.u_value())
}

pub fn roof_u_value(survey: &BuildingSurvey) -> f64 {
    survey
        .roof_insulation
        .map(|state| state.u_value())
        .unwrap_or_else(|| survey.year_band.values().roof_u)
}

/// 지붕 손실: 지상층 면적 × 지붕 U값 × 0.8.
pub fn roof_loss(survey: &BuildingSurvey) -> f64 {
    let surface = sanitize(survey.ground_floor().surface_m2);
    surface * roof_u_value(survey) * ROOF_CORRECTION
}

/// 바닥 U값. 바닥 단열 상태는 다층 건물 + 상세 모드에서만 반영한다.
pub fn floor_u_value(survey: &BuildingSurvey) -> f64 {
    let use_insulation_state = survey.level_count() > 1 && survey.mode == SurveyMode::Advanced;
    match survey.floor_insulation {
        Some(state) if use_insulation_state => state.u_value(),
        _ => survey.year_band.values().floor_u,
    }
}

/// 바닥 손실: 지상층 면적 × 바닥 U값 × 접지 조건 계수.
pub fn floor_loss(survey: &BuildingSurvey) -> f64 {
    let surface = sanitize(survey.ground_floor().surface_m2);
    surface * floor_u_value(survey) * survey.floor_contact.coefficient()
}

/// 환기 손실: 전체 체적 × 환기 방식 계수 × 0.34.
pub fn air_renewal_loss(survey: &BuildingSurvey) -> f64 {
    let volume: f64 = survey.levels().iter().map(|f| f.volume_m3()).sum();
    volume * survey.ventilation_type.coefficient() * AIR_HEAT_CAPACITY
}

/// 열교 손실: (환기 + 바닥 + 창 + 지붕) × 연도 구간 열교 계수.
/// 벽 손실은 합산 대상에서 빠진다.
pub fn thermal_bridge_loss(
    year_band: YearBand,
    air_renewal: f64,
    floor: f64,
    window: f64,
    roof: f64,
) -> f64 {
    let base = sanitize(air_renewal) + sanitize(floor) + sanitize(window) + sanitize(roof);
    base * year_band.values().thermal_bridge
}
