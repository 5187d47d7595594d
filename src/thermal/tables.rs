//! 열손실 계산에 쓰이는 정적 조회 테이블.
//!
//! 값은 계산식과 분리해 두며, 표에 없는 키는 가장 보수적인(손실이 큰) 항목으로 대체한다.

categorical! {
    /// 벽체/단열재 재료.
    pub enum Material (fallback = Stone) {
        Concrete => "concrete",
        Brick => "brick",
        ConcreteBlock => "concrete-block",
        Wood => "wood",
        Stone => "stone",
        GlassWool => "glass-wool",
        RockWool => "rock-wool",
        ExpandedPolystyrene => "expanded-polystyrene",
        ExtrudedPolystyrene => "extruded-polystyrene",
        Polyurethane => "polyurethane",
        WoodFiber => "wood-fiber",
        Cellulose => "cellulose",
    }
}

impl Material {
    /// 열전도율 λ [W/m·K]
    pub fn conductivity(self) -> f64 {
        match self {
            Material::Concrete => 1.75,
            Material::Brick => 0.84,
            Material::ConcreteBlock => 1.05,
            Material::Wood => 0.15,
            Material::Stone => 2.30,
            Material::GlassWool => 0.035,
            Material::RockWool => 0.038,
            Material::ExpandedPolystyrene => 0.038,
            Material::ExtrudedPolystyrene => 0.030,
            Material::Polyurethane => 0.024,
            Material::WoodFiber => 0.040,
            Material::Cellulose => 0.040,
        }
    }
}

categorical! {
    /// 건축 연도 구간. 구간별로 벽/지붕/바닥 U값과 열교 계수가 정해진다.
    pub enum YearBand (fallback = Before1974) {
        Before1974 => "before-1974",
        From1974To1982 => "1974-1982",
        From1983To1988 => "1983-1988",
        From1989To2000 => "1989-2000",
        From2001To2005 => "2001-2005",
        From2006To2012 => "2006-2012",
        From2013To2019 => "2013-2019",
        From2020To2024 => "2020-2024",
    }
}

/// 연도 구간 하나에 대응하는 계수 묶음.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearBandValues {
    /// 벽 U값 [W/m²·K]
    pub wall_u: f64,
    /// 지붕 U값 [W/m²·K]
    pub roof_u: f64,
    /// 바닥 U값 [W/m²·K]
    pub floor_u: f64,
    /// 열교 할증 계수 (0.10~0.25). 보간 없이 구간별로 정의된다.
    pub thermal_bridge: f64,
}

const fn band(wall_u: f64, roof_u: f64, floor_u: f64, thermal_bridge: f64) -> YearBandValues {
    YearBandValues {
        wall_u,
        roof_u,
        floor_u,
        thermal_bridge,
    }
}

impl YearBand {
    pub fn values(self) -> YearBandValues {
        match self {
            YearBand::Before1974 => band(2.50, 2.50, 2.00, 0.10),
            YearBand::From1974To1982 => band(1.80, 1.50, 1.50, 0.15),
            YearBand::From1983To1988 => band(1.20, 0.80, 1.00, 0.20),
            YearBand::From1989To2000 => band(0.80, 0.50, 0.80, 0.25),
            YearBand::From2001To2005 => band(0.50, 0.30, 0.50, 0.20),
            YearBand::From2006To2012 => band(0.40, 0.25, 0.40, 0.15),
            YearBand::From2013To2019 => band(0.30, 0.20, 0.30, 0.12),
            YearBand::From2020To2024 => band(0.25, 0.15, 0.25, 0.10),
        }
    }
}

categorical! {
    /// 창호 종류(단판/복층 × 프레임/가스).
    pub enum GlazingType (fallback = SingleMetalFrame) {
        SingleMetalFrame => "single/metal-frame",
        SingleWoodFrame => "single/wood-frame",
        SinglePvcFrame => "single/pvc-frame",
        DoubleMetalFrame => "double/metal-frame",
        DoubleWoodFrame => "double/wood-frame",
        DoublePvcFrame => "double/pvc-frame",
        DoubleArgonGas => "double/argon-gas",
    }
}

impl GlazingType {
    /// 창호 U값 [W/m²·K]
    pub fn u_value(self) -> f64 {
        match self {
            GlazingType::SingleMetalFrame => 5.0,
            GlazingType::SingleWoodFrame => 4.6,
            GlazingType::SinglePvcFrame => 4.4,
            GlazingType::DoubleMetalFrame => 3.3,
            GlazingType::DoubleWoodFrame => 2.8,
            GlazingType::DoublePvcFrame => 2.6,
            GlazingType::DoubleArgonGas => 1.2,
        }
    }
}

categorical! {
    /// 환기 방식.
    pub enum VentilationType (fallback = Natural) {
        Natural => "natural",
        /// 단순 배기형 기계환기
        SimpleFlow => "simple-flow",
        /// 습도 감응형 기계환기
        HumidityControlled => "humidity-controlled",
        /// 열회수 전열교환 환기
        DoubleFlow => "double-flow",
    }
}

impl VentilationType {
    pub fn coefficient(self) -> f64 {
        match self {
            VentilationType::Natural => 1.00,
            VentilationType::SimpleFlow => 0.70,
            VentilationType::HumidityControlled => 0.50,
            VentilationType::DoubleFlow => 0.30,
        }
    }
}

categorical! {
    /// 바닥이 접하는 조건.
    pub enum FloorContactType (fallback = CrawlSpace) {
        BuriedCellar => "buried-cellar",
        SemiBuriedCellar => "semi-buried-cellar",
        CrawlSpace => "crawl-space",
        SlabOnGrade => "slab-on-grade",
    }
}

impl FloorContactType {
    pub fn coefficient(self) -> f64 {
        match self {
            FloorContactType::BuriedCellar => 0.6,
            FloorContactType::SemiBuriedCellar => 0.7,
            FloorContactType::CrawlSpace => 0.8,
            FloorContactType::SlabOnGrade => 0.3,
        }
    }
}

categorical! {
    /// 지붕 단열 상태. 지정하면 연도 구간의 지붕 U값을 대신한다.
    pub enum RoofInsulationState (fallback = None) {
        None => "none",
        Weak => "weak",
        Medium => "medium",
        Good => "good",
        VeryGood => "very-good",
    }
}

impl RoofInsulationState {
    pub fn u_value(self) -> f64 {
        match self {
            RoofInsulationState::None => 2.50,
            RoofInsulationState::Weak => 1.00,
            RoofInsulationState::Medium => 0.50,
            RoofInsulationState::Good => 0.25,
            RoofInsulationState::VeryGood => 0.15,
        }
    }
}

categorical! {
    /// 바닥 단열 상태. 다층 건물의 상세 모드에서만 사용된다.
    pub enum FloorInsulationState (fallback = None) {
        None => "none",
        Weak => "weak",
        Medium => "medium",
        Good => "good",
    }
}

impl FloorInsulationState {
    pub fn u_value(self) -> f64 {
        match self {
            FloorInsulationState::None => 2.00,
            FloorInsulationState::Weak => 1.00,
            FloorInsulationState::Medium => 0.50,
            FloorInsulationState::Good => 0.30,
        }
    }
}

categorical! {
    /// 건물 주 방향.
    pub enum Orientation (fallback = Unspecified) {
        North => "north",
        South => "south",
        East => "east",
        West => "west",
        Unspecified => "unspecified",
    }
}

impl Orientation {
    /// 방위 보정값 δ. 최종 손실에 `1 + δ`를 곱한다.
    pub fn delta(self) -> f64 {
        match self {
            Orientation::North => 0.00081,
            Orientation::East => 0.00564,
            Orientation::South => -0.00093,
            Orientation::West => -0.00552,
            Orientation::Unspecified => 0.0,
        }
    }
}
