//! 건물 열손실 계산 모듈 모음.
//! 조회 테이블 → 외벽 기하 → 부위별 손실 → 합산 순으로 구성한다.

pub mod aggregate;
pub mod departments;
pub mod geometry;
pub mod losses;
pub mod survey;
pub mod tables;

pub use aggregate::*;
pub use geometry::{AdjacencyDegree, BuildingShape, FloorGeometry};
pub use survey::*;
pub use tables::*;

/// NaN/무한대/음수를 0으로 바꾼다. 모든 계산 값은 0 이상이어야 한다.
pub(crate) fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
