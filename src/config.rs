use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::cycle::{AmbientConditions, GasTurbineInput, SteamCycleInput};
use crate::export::ExportUnits;
use crate::plant::HrsgSettings;
use crate::properties::IdealGasAir;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "plant.toml";

/// 플랜트 운전점 설정. 빠진 항목은 기준 운전점 값으로 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantConfig {
    pub steam: SteamCycleInput,
    pub gas_turbine: GasTurbineInput,
    pub ambient: AmbientConditions,
    pub air: IdealGasAir,
    pub hrsg: HrsgSettings,
    pub export: ExportUnits,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            steam: SteamCycleInput::default(),
            gas_turbine: GasTurbineInput::default(),
            ambient: AmbientConditions::default(),
            air: IdealGasAir::default(),
            hrsg: HrsgSettings::default(),
            export: ExportUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("설정 값 오류: {0}")]
    Invalid(String),
}

/// 설정 파일을 읽는다.
pub fn load(path: &Path) -> Result<PlantConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: PlantConfig = toml::from_str(&content)?;
    Ok(cfg)
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<PlantConfig, ConfigError> {
    if path.exists() {
        load(path)
    } else {
        let cfg = PlantConfig::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl PlantConfig {
    /// 설정을 TOML로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 해석 전에 걸러낼 수 있는 설정 오류를 확인한다.
    /// 사이클 입력의 물리적 타당성은 각 해석기가 다시 검사한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let hrsg = &self.hrsg;
        if !(hrsg.flue_gas_cp > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "배가스 비열은 양수여야 합니다: {}",
                hrsg.flue_gas_cp
            )));
        }
        if let Some(m) = hrsg.flue_gas_mass_flow {
            if !(m > 0.0) {
                return Err(ConfigError::Invalid(format!("배가스 유량은 양수여야 합니다: {m}")));
            }
        }
        if !(hrsg.pinch_threshold_k >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "핀치 기준 온도차는 0 이상이어야 합니다: {}",
                hrsg.pinch_threshold_k
            )));
        }
        if !(self.air.cp > 0.0 && self.air.gamma > 1.0) {
            return Err(ConfigError::Invalid(format!(
                "공기 물성 오류: cp={}, k={}",
                self.air.cp, self.air.gamma
            )));
        }
        Ok(())
    }
}
