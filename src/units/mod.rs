//! 출력 표시용 단위 변환.

pub mod power;

pub use power::{convert_power, PowerUnit};
