use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{ConfigError, PlantConfig};
use crate::export;
use crate::plant::{self, PlantError, PlantReport};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 설정 로드/검증 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 플랜트 해석 오류
    #[error("플랜트 해석 오류: {0}")]
    Plant(#[from] PlantError),
}

/// 실행 옵션.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// CSV를 쓸 디렉터리. `None`이면 내보내지 않는다.
    pub out_dir: Option<PathBuf>,
}

/// 설정을 검증하고 플랜트를 해석한 뒤 결과를 내보낸다.
///
/// 내보내기 실패는 경고만 남기고 해석 결과는 그대로 돌려준다.
pub fn run(config: &PlantConfig, options: &RunOptions) -> Result<PlantReport, AppError> {
    config.validate()?;
    let report = plant::evaluate(config)?;

    let summary = &report.summary;
    info!(
        gas_turbine_efficiency = summary.gas_turbine_efficiency,
        steam_cycle_efficiency = summary.steam_cycle_efficiency,
        combined_efficiency = summary.combined_efficiency,
        net_work_kw = summary.net_work,
        "종합 결과"
    );
    if let Some(pinch) = report.pinch.pinch() {
        info!(
            exchanger = %pinch.name,
            approach_k = pinch.min_approach_k(),
            "핀치점"
        );
    }

    if let Some(dir) = &options.out_dir {
        match export::export_report(&report, dir, config.export) {
            Ok(paths) => info!(files = paths.len(), dir = %dir.display(), "CSV 저장 완료"),
            Err(err) => warn!(error = %err, "CSV 저장 실패, 계속 진행"),
        }
    }
    Ok(report)
}
