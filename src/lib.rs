//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 호출자도 같은 엔진을 쓰게 한다.
//!
//! - [`thermal::compute_heat_loss`]: 설문 → 설계 열손실
//! - [`heat_pump::match_compatible_products`]: 필요 출력 + 카탈로그 → 적합 제품

#[macro_use]
mod categorical;

pub mod app;
pub mod config;
pub mod heat_pump;
pub mod project;
pub mod thermal;
pub mod ui_cli;
pub mod units;
