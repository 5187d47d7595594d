//! 히트펌프 카탈로그와 제품 선정 모듈 모음.

pub mod catalog;
pub mod matcher;

pub use catalog::*;
pub use matcher::*;
