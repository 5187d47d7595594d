use clap::Subcommand;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::heat_pump::{self, CatalogEntry, CatalogError, MatchPreferences, MatchResult};
use crate::project::{self, ProjectError};
use crate::thermal::{self, BuildingSurvey, LossResult};
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 프로젝트 파일 오류
    #[error("프로젝트 오류: {0}")]
    Project(#[from] ProjectError),
    /// 카탈로그 오류
    #[error("카탈로그 오류: {0}")]
    Catalog(#[from] CatalogError),
}

/// CLI 하위 명령.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 설계 열손실을 계산한다
    Loss {
        /// 프로젝트 파일(TOML)
        project: PathBuf,
    },
    /// 주어진 필요 출력으로 제품을 선정한다
    Match {
        project: PathBuf,
        /// 필요 출력 [kW]
        #[arg(long)]
        power: f64,
        /// 카탈로그 경로 (설정값 대신 사용)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// 열손실 계산 후 그 값으로 제품을 선정한다
    Size {
        project: PathBuf,
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// 열손실 계산과 제품 선정을 한 번에 수행한 결과.
#[derive(Debug, Clone)]
pub struct Sizing<'a> {
    pub loss: LossResult,
    pub matches: Vec<MatchResult<'a>>,
}

/// 설문으로 열손실을 구하고 그 값을 필요 출력으로 제품을 선정한다.
pub fn size<'a>(
    survey: &BuildingSurvey,
    catalog: &'a [CatalogEntry],
    prefs: &MatchPreferences,
) -> Sizing<'a> {
    let loss = thermal::compute_heat_loss(survey);
    let matches = heat_pump::match_compatible_products(catalog, loss.total_loss_kw, prefs);
    Sizing { loss, matches }
}

fn load_catalog(cli_path: Option<&Path>, config: &Config) -> Result<Vec<CatalogEntry>, AppError> {
    let path = cli_path.unwrap_or(config.catalog_path.as_path());
    Ok(heat_pump::load_catalog_file(path)?)
}

/// 하위 명령 하나를 실행한다.
pub fn run(command: &Command, config: &Config) -> Result<(), AppError> {
    match command {
        Command::Loss { project: path } => {
            let project = project::load_project_file(path)?;
            let loss = thermal::compute_heat_loss(&project.survey);
            ui_cli::print_loss(&loss, config.power_unit);
        }
        Command::Match {
            project: path,
            power,
            catalog,
        } => {
            let project = project::load_project_file(path)?;
            let prefs = project.preferences()?;
            let catalog = load_catalog(catalog.as_deref(), config)?;
            let matches = heat_pump::match_compatible_products(&catalog, *power, prefs);
            ui_cli::print_matches(&matches, config.power_unit);
        }
        Command::Size {
            project: path,
            catalog,
        } => {
            let project = project::load_project_file(path)?;
            let prefs = project.preferences()?;
            let catalog = load_catalog(catalog.as_deref(), config)?;
            let sizing = size(&project.survey, &catalog, prefs);
            ui_cli::print_loss(&sizing.loss, config.power_unit);
            ui_cli::print_matches(&sizing.matches, config.power_unit);
        }
    }
    Ok(())
}
