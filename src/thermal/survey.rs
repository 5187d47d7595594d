use serde::{Deserialize, Serialize};

use super::geometry::{AdjacencyDegree, BuildingShape};
use super::sanitize;
use super::tables::{
    FloorContactType, FloorInsulationState, GlazingType, Material, Orientation,
    RoofInsulationState, VentilationType, YearBand,
};

/// 계산에 사용하는 최대 층 수(지상층, 1층, 2층).
pub const MAX_LEVELS: usize = 3;

/// 층 하나의 입력값.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorLevel {
    /// 바닥 면적 [m²]
    pub surface_m2: f64,
    /// 천장 높이 [m]
    pub ceiling_height_m: f64,
}

impl FloorLevel {
    pub fn new(surface_m2: f64, ceiling_height_m: f64) -> Self {
        Self {
            surface_m2,
            ceiling_height_m,
        }
    }

    /// 면적이 있는 층만 실제로 존재하는 것으로 본다.
    pub fn exists(&self) -> bool {
        sanitize(self.surface_m2) > 0.0
    }

    /// 층 체적 [m³]
    pub fn volume_m3(&self) -> f64 {
        sanitize(self.surface_m2) * sanitize(self.ceiling_height_m)
    }
}

/// 설문 입력 모드. 상세 모드에서만 바닥 단열 상태를 반영한다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyMode {
    #[default]
    Simple,
    Advanced,
}

/// 재료 + 두께 [m] 한 겹.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub material: Material,
    pub thickness_m: f64,
}

impl Layer {
    pub fn new(material: Material, thickness_m: f64) -> Self {
        Self {
            material,
            thickness_m,
        }
    }

    /// 열저항 e/λ [m²·K/W]. 두께나 열전도율이 0이면 0.
    pub fn resistance(&self) -> f64 {
        let lambda = self.material.conductivity();
        if lambda > 0.0 {
            sanitize(self.thickness_m) / lambda
        } else {
            0.0
        }
    }
}

/// 벽체 구성을 직접 지정하는 상세 입력. 연도 구간의 벽 U값을 대신한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdvancedWallSpec {
    /// 구조체 재료와 두께
    pub base: Layer,
    /// 내단열층
    #[serde(default)]
    pub interior_insulation: Option<Layer>,
    /// 외단열층
    #[serde(default)]
    pub exterior_insulation: Option<Layer>,
}

/// 열손실 계산 입력 설문. 계산 한 번마다 통째로 전달된다.
///
/// 빠진 숫자 항목은 0, 빠진 범주 항목은 각 테이블의 기본 항목으로 채워진다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingSurvey {
    /// 층별 면적/높이. 최대 3개 층까지 사용한다.
    pub floors: Vec<FloorLevel>,
    pub building_shape: BuildingShape,
    pub adjacency: AdjacencyDegree,
    /// 외벽 총면적 대비 창 면적 비율 [%]
    pub window_ratio_pct: f64,
    pub glazing_type: GlazingType,
    pub year_band: YearBand,
    pub ventilation_type: VentilationType,
    pub roof_insulation: Option<RoofInsulationState>,
    pub floor_contact: FloorContactType,
    pub floor_insulation: Option<FloorInsulationState>,
    pub mode: SurveyMode,
    pub advanced_wall: Option<AdvancedWallSpec>,
    /// 실내 설정 온도 [°C]
    pub heating_setpoint_c: f64,
    /// 2자리 행정구역(데파르트망) 코드
    pub department_code: Option<String>,
    pub orientation: Orientation,
    /// 이미 알고 있는 열손실 [kW]. 지정되면 모든 계산을 건너뛴다.
    pub known_loss_kw: Option<f64>,
}

impl BuildingSurvey {
    /// 계산에 쓰이는 층 목록(최대 3개).
    pub fn levels(&self) -> &[FloorLevel] {
        let n = self.floors.len().min(MAX_LEVELS);
        &self.floors[..n]
    }

    /// 지상층. 없으면 면적 0인 층으로 본다.
    pub fn ground_floor(&self) -> FloorLevel {
        self.floors.first().copied().unwrap_or_default()
    }

    /// 실제 존재하는 층 수.
    pub fn level_count(&self) -> usize {
        self.levels().iter().filter(|f| f.exists()).count()
    }

    /// 창 면적 비율(0~1).
    pub fn window_ratio(&self) -> f64 {
        (sanitize(self.window_ratio_pct) / 100.0).min(1.0)
    }
}
