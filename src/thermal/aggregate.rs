use serde::{Deserialize, Serialize};

use super::departments::design_temperature_c;
use super::geometry::{resolve_floor, FloorGeometry};
use super::losses;
use super::sanitize;
use super::survey::{BuildingSurvey, MAX_LEVELS};

/// 부위별 손실 [W/K]. 온도차를 곱하기 전 값이다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LossBreakdown {
    pub wall: f64,
    pub window: f64,
    pub roof: f64,
    pub floor: f64,
    pub air_renewal: f64,
    pub thermal_bridge: f64,
}

impl LossBreakdown {
    pub fn total(&self) -> f64 {
        self.wall + self.window + self.roof + self.floor + self.air_renewal + self.thermal_bridge
    }
}

/// 열손실 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LossResult {
    /// 설계 열손실 [kW], 소수 둘째 자리 반올림
    pub total_loss_kw: f64,
    /// 알려진 손실값을 그대로 쓴 경우 `None`
    pub breakdown: Option<LossBreakdown>,
}

/// 층별 외벽 기하를 계산한다. 4번째 층부터는 무시한다.
pub fn resolve_geometry(survey: &BuildingSurvey) -> Vec<FloorGeometry> {
    if survey.floors.len() > MAX_LEVELS {
        tracing::warn!(
            levels = survey.floors.len(),
            max = MAX_LEVELS,
            "extra levels ignored"
        );
    }
    let ratio = survey.window_ratio();
    survey
        .levels()
        .iter()
        .map(|f| {
            resolve_floor(
                f.surface_m2,
                f.ceiling_height_m,
                survey.building_shape,
                survey.adjacency,
                ratio,
            )
        })
        .collect()
}

/// 여섯 부위 손실을 계산한다.
pub fn compute_breakdown(survey: &BuildingSurvey) -> LossBreakdown {
    let floors = resolve_geometry(survey);
    let wall = losses::wall_loss(survey, &floors);
    let window = losses::window_loss(survey, &floors);
    let roof = losses::roof_loss(survey);
    let floor = losses::floor_loss(survey);
    let air_renewal = losses::air_renewal_loss(survey);
    let thermal_bridge =
        losses::thermal_bridge_loss(survey.year_band, air_renewal, floor, window, roof);
    LossBreakdown {
        wall: sanitize(wall),
        window: sanitize(window),
        roof: sanitize(roof),
        floor: sanitize(floor),
        air_renewal: sanitize(air_renewal),
        thermal_bridge: sanitize(thermal_bridge),
    }
}

/// 실내 설정온도와 설계 외기온도의 차 [K]. 음수는 0으로 본다.
pub fn design_delta_t(survey: &BuildingSurvey) -> f64 {
    let t_ext = design_temperature_c(survey.department_code.as_deref());
    let setpoint = if survey.heating_setpoint_c.is_finite() {
        survey.heating_setpoint_c
    } else {
        0.0
    };
    (setpoint - t_ext).max(0.0)
}

/// 건물 설계 열손실을 계산한다.
///
/// `known_loss_kw`가 있으면 나머지 입력과 관계없이 그 값을 그대로 돌려준다.
pub fn compute_heat_loss(survey: &BuildingSurvey) -> LossResult {
    if let Some(known) = survey.known_loss_kw {
        return LossResult {
            total_loss_kw: sanitize(known),
            breakdown: None,
        };
    }

    let breakdown = compute_breakdown(survey);
    let delta_t = design_delta_t(survey);
    let orientation = 1.0 + survey.orientation.delta();
    let total = sanitize(breakdown.total() * delta_t / 1000.0 * orientation);
    tracing::debug!(?breakdown, delta_t, orientation, total, "heat loss computed");

    LossResult {
        total_loss_kw: round2(total),
        breakdown: Some(breakdown),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
