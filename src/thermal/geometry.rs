use super::sanitize;

categorical! {
    /// 건물 평면 형태. 바닥 면적 대비 외벽 둘레를 결정한다.
    pub enum BuildingShape (fallback = UShaped) {
        Square => "square",
        Rectangular => "rectangular",
        LShaped => "l-shaped",
        UShaped => "u-shaped",
    }
}

impl BuildingShape {
    /// 등가 변 길이 L [m]과 변 개수 배수 k를 반환한다.
    pub fn side_and_multiplier(self, surface_m2: f64) -> (f64, f64) {
        let s = sanitize(surface_m2);
        match self {
            BuildingShape::Square => (s.sqrt(), 4.0),
            BuildingShape::Rectangular => (s.sqrt() * 0.707, 6.0),
            BuildingShape::LShaped => ((s / 3.0).sqrt(), 8.0),
            BuildingShape::UShaped => ((s / 6.0).sqrt(), 12.0),
        }
    }
}

categorical! {
    /// 이웃 건물과 공유하는 벽(맞벽) 수.
    pub enum AdjacencyDegree (fallback = None) {
        None => "none",
        OneSide => "one-side",
        TwoSides => "two-sides",
    }
}

impl AdjacencyDegree {
    pub fn shared_sides(self) -> f64 {
        match self {
            AdjacencyDegree::None => 0.0,
            AdjacencyDegree::OneSide => 1.0,
            AdjacencyDegree::TwoSides => 2.0,
        }
    }
}

/// 층 하나의 외벽 기하 계산 결과.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloorGeometry {
    /// 외기에 접한 둘레 [m]
    pub perimeter_m: f64,
    /// 외벽 총면적 SMV [m²]
    pub gross_wall_m2: f64,
    /// 불투명 벽 면적 [m²]
    pub opaque_m2: f64,
    /// 창 면적 [m²]
    pub glazed_m2: f64,
}

/// 층 면적과 건물 형태로부터 외벽 둘레/면적을 구한다.
///
/// `window_ratio`는 0~1 비율이다. 면적이 0인 층은 모든 값이 0이 된다.
pub fn resolve_floor(
    surface_m2: f64,
    ceiling_height_m: f64,
    shape: BuildingShape,
    adjacency: AdjacencyDegree,
    window_ratio: f64,
) -> FloorGeometry {
    let (side, k) = shape.side_and_multiplier(surface_m2);
    let perimeter_m = sanitize(side * k - adjacency.shared_sides() * side);
    let gross_wall_m2 = sanitize(perimeter_m * sanitize(ceiling_height_m));
    let ratio = sanitize(window_ratio).min(1.0);
    let opaque_m2 = gross_wall_m2 * (1.0 - ratio);
    FloorGeometry {
        perimeter_m,
        gross_wall_m2,
        opaque_m2,
        glazed_m2: gross_wall_m2 - opaque_m2,
    }
}
