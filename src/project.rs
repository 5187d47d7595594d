//! 설문과 선정 조건을 한 TOML 파일로 묶은 프로젝트 입력.
//!
//! ```toml
//! [survey]
//! building_shape = "square"
//! year_band = "before-1974"
//! floors = [{ surface_m2 = 100.0, ceiling_height_m = 2.5 }]
//!
//! [preferences]
//! type_tag = "air-water"
//! system_tag = "monobloc"
//! emitter = "low-temperature-radiator"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::heat_pump::MatchPreferences;
use crate::thermal::BuildingSurvey;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("프로젝트 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("프로젝트 파일 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// 제품 선정에 필요한 [preferences] 항목이 없음
    #[error("[preferences] 항목이 없습니다")]
    MissingPreferences,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    #[serde(default)]
    pub survey: BuildingSurvey,
    #[serde(default)]
    pub preferences: Option<MatchPreferences>,
}

impl ProjectFile {
    pub fn from_toml(content: &str) -> Result<Self, ProjectError> {
        Ok(toml::from_str(content)?)
    }

    pub fn preferences(&self) -> Result<&MatchPreferences, ProjectError> {
        self.preferences
            .as_ref()
            .ok_or(ProjectError::MissingPreferences)
    }
}

pub fn load_project_file(path: &Path) -> Result<ProjectFile, ProjectError> {
    let content = fs::read_to_string(path)?;
    ProjectFile::from_toml(&content)
}
