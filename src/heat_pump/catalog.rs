use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::thermal::sanitize;

/// 카탈로그 로드/검증 오류. 구조적으로 잘못된 데이터는 추측하지 않고 바로 실패한다.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 파일 입출력 오류
    #[error("카탈로그 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// JSON 파싱 오류
    #[error("카탈로그 파싱 오류: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("'{name}': power_models와 cascade 중 하나가 있어야 합니다")]
    MissingPowerSpec { name: String },
    #[error("'{name}': power_models와 cascade를 동시에 지정할 수 없습니다")]
    AmbiguousPowerSpec { name: String },
    #[error("'{name}': power_models가 비어 있습니다")]
    EmptyModelList { name: String },
    #[error("'{name}': cascade 증분은 0보다 커야 합니다 (increment={increment})")]
    InvalidIncrement { name: String, increment: f64 },
    #[error("'{name}': cascade 출력 범위가 잘못되었습니다 ({min} > {max})")]
    InvalidPowerRange { name: String, min: f64, max: f64 },
    #[error("'{name}': 방열기 온도 범위가 잘못되었습니다 ({min} > {max})")]
    InvalidEmitterRange { name: String, min: f64, max: f64 },
}

/// 개별 출력 모델.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerModel {
    pub model_id: String,
    /// 난방 출력 [kW]
    pub calorific_power_kw: f64,
    /// 냉방 출력 [kW]
    #[serde(default)]
    pub frigorific_power_kw: f64,
    /// 소비 전력 [kW]
    #[serde(default)]
    pub absorbed_power_kw: f64,
    #[serde(default)]
    pub cop: f64,
    /// 계절 난방 효율 [%]
    #[serde(default)]
    pub etas: f64,
}

impl PowerModel {
    fn sanitized(self) -> Self {
        Self {
            calorific_power_kw: sanitize(self.calorific_power_kw),
            frigorific_power_kw: sanitize(self.frigorific_power_kw),
            absorbed_power_kw: sanitize(self.absorbed_power_kw),
            cop: sanitize(self.cop),
            etas: sanitize(self.etas),
            ..self
        }
    }
}

/// 방열기 운전 온도 범위 [°C]. 양 끝을 포함한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TempRange {
    pub min_c: f64,
    pub max_c: f64,
}

impl TempRange {
    pub fn contains(&self, temp_c: f64) -> bool {
        temp_c >= self.min_c && temp_c <= self.max_c
    }
}

/// 모듈을 일정 출력 단위로 쌓아 구성하는 캐스케이드 제품 사양.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CascadeSpec {
    /// 출력 증분 [kW]
    pub increment_kw: f64,
    pub min_power_kw: f64,
    pub max_power_kw: f64,
    pub base_model_name: String,
    /// 난방 출력 대비 냉방 출력 비
    pub avg_frigo_ratio: f64,
    /// 난방 출력 대비 소비 전력 비
    pub avg_absorbed_ratio: f64,
    pub avg_cop: f64,
    pub avg_etas: f64,
}

/// 제품군의 출력 구성 방식.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ProductFamily {
    /// 고정된 모델 목록
    Discrete { power_models: Vec<PowerModel> },
    /// 증분 단위로 합성되는 모듈형 제품
    Cascade(CascadeSpec),
}

/// 검증을 마친 카탈로그 항목.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    /// 종류/시스템/냉매 태그 (소문자로 정리됨)
    pub tags: BTreeSet<String>,
    pub emitter_temp_range: TempRange,
    pub family: ProductFamily,
}

impl CatalogEntry {
    /// 태그 포함 여부. 대소문자를 구분하지 않는다.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&normalize_tag(tag))
    }
}

/// 외부 카탈로그 파일의 레코드 형식.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogRecord {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub emitter_temp_range: TempRange,
    #[serde(default)]
    pub power_models: Option<Vec<PowerModel>>,
    #[serde(default)]
    pub cascade: Option<CascadeSpec>,
}

impl TryFrom<CatalogRecord> for CatalogEntry {
    type Error = CatalogError;

    fn try_from(record: CatalogRecord) -> Result<Self, Self::Error> {
        let CatalogRecord {
            name,
            tags,
            emitter_temp_range,
            power_models,
            cascade,
        } = record;

        if !(emitter_temp_range.min_c <= emitter_temp_range.max_c) {
            return Err(CatalogError::InvalidEmitterRange {
                name,
                min: emitter_temp_range.min_c,
                max: emitter_temp_range.max_c,
            });
        }

        let family = match (power_models, cascade) {
            (None, None) => return Err(CatalogError::MissingPowerSpec { name }),
            (Some(_), Some(_)) => return Err(CatalogError::AmbiguousPowerSpec { name }),
            (Some(models), None) => {
                if models.is_empty() {
                    return Err(CatalogError::EmptyModelList { name });
                }
                ProductFamily::Discrete {
                    power_models: models.into_iter().map(PowerModel::sanitized).collect(),
                }
            }
            (None, Some(spec)) => {
                if !(spec.increment_kw.is_finite() && spec.increment_kw > 0.0) {
                    return Err(CatalogError::InvalidIncrement {
                        name,
                        increment: spec.increment_kw,
                    });
                }
                if !(spec.min_power_kw <= spec.max_power_kw) {
                    return Err(CatalogError::InvalidPowerRange {
                        name,
                        min: spec.min_power_kw,
                        max: spec.max_power_kw,
                    });
                }
                ProductFamily::Cascade(spec)
            }
        };

        Ok(CatalogEntry {
            name,
            tags: tags.iter().map(|t| normalize_tag(t)).collect(),
            emitter_temp_range,
            family,
        })
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// JSON 배열 형식의 카탈로그를 읽어 검증한다.
pub fn load_catalog_json(json: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let records: Vec<CatalogRecord> = serde_json::from_str(json)?;
    records.into_iter().map(CatalogEntry::try_from).collect()
}

/// 카탈로그 파일을 읽어 검증한다.
pub fn load_catalog_file(path: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    let content = fs::read_to_string(path)?;
    let entries = load_catalog_json(&content)?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "catalog loaded");
    Ok(entries)
}
