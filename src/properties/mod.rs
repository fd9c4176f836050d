//! 물·증기 및 공기 물성 서비스.
//!
//! 사이클 해석기는 이 모듈의 트레이트에만 의존한다. 기본 구현은 seuif97 기반
//! [`If97`]과 정비열 이상기체 [`IdealGasAir`]이다.
//! 입력 단위: 압력 bar(abs), 온도 °C. 출력: 비엔탈피 kJ/kg, 비엔트로피 kJ/kg·K.

pub mod air;
pub mod if97;

pub use air::IdealGasAir;
pub use if97::If97;

use thiserror::Error;

use crate::solver::{find_root, BisectionConfig, BisectionError};

/// 역계산 하한 온도(삼중점, °C).
pub const LIQUID_T_MIN_C: f64 = 0.01;
/// IF97 Region 2 상한 온도(°C).
pub const VAPOR_T_MAX_C: f64 = 800.0;

/// 한 상태점의 비엔탈피/비엔트로피.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecificState {
    /// 비엔탈피(kJ/kg)
    pub enthalpy: f64,
    /// 비엔트로피(kJ/kg·K)
    pub entropy: f64,
}

/// 역계산에 쓰는 단상 영역.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// 압축수(IF97 Region 1)
    Liquid,
    /// 과열 증기(IF97 Region 2)
    Vapor,
}

/// 상태점의 상. 포화 상태는 건도를 함께 가진다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Liquid,
    Saturated { quality: f64 },
    Vapor,
}

/// 물성 계산 오류.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PropertyError {
    #[error("압력은 양수여야 합니다: {0} bar")]
    NonPositivePressure(f64),

    #[error("건도는 0~1 사이여야 합니다: {0}")]
    InvalidQuality(f64),

    #[error("IF97 계산 실패(유효 범위 밖이거나 수렴 실패): {what}, p={pressure_bar} bar, 입력={value}")]
    OutOfRange {
        what: &'static str,
        pressure_bar: f64,
        value: f64,
    },

    #[error("온도 범위 밖: {what}, T={t_c} °C")]
    TemperatureOutOfRange { what: &'static str, t_c: f64 },

    #[error("포화온도 역계산이 수렴하지 않음: p={0} bar")]
    SaturationNotConverged(f64),

    #[error("엔트로피 역계산 실패: {0}")]
    Bisection(#[from] BisectionError),
}

/// 물/증기 물성 서비스.
///
/// 구현체는 정방향 조회(압력+온도, 압력+건도, 포화 조건)만 제공하면 되고,
/// 엔트로피 기반 역계산은 기본 메서드가 이분법으로 처리한다.
pub trait WaterProperties {
    /// 압축수 영역 강제 계산.
    fn liquid(&self, p_bar: f64, t_c: f64) -> Result<SpecificState, PropertyError>;

    /// 과열 증기 영역 강제 계산.
    fn vapor(&self, p_bar: f64, t_c: f64) -> Result<SpecificState, PropertyError>;

    /// 포화 혼합물. `quality`는 증기 질량 분율.
    fn saturated(&self, p_bar: f64, quality: f64) -> Result<SpecificState, PropertyError>;

    /// 포화온도(°C).
    fn saturation_temperature(&self, p_bar: f64) -> Result<f64, PropertyError>;

    /// 포화압력(bar abs).
    fn saturation_pressure(&self, t_c: f64) -> Result<f64, PropertyError>;

    /// 역계산 이분법 설정.
    fn inverse_config(&self) -> BisectionConfig {
        BisectionConfig::default()
    }

    /// 상에 맞는 조회로 h/s를 구한다.
    fn state(&self, p_bar: f64, t_c: f64, phase: Phase) -> Result<SpecificState, PropertyError> {
        match phase {
            Phase::Liquid => self.liquid(p_bar, t_c),
            Phase::Vapor => self.vapor(p_bar, t_c),
            Phase::Saturated { quality } => self.saturated(p_bar, quality),
        }
    }

    /// 주어진 압력에서 엔트로피가 `s_target`인 온도를 영역 안에서 찾는다.
    ///
    /// 액상은 [삼중점, 포화온도], 증기는 [포화온도, 800 °C] 구간을 이분한다.
    fn temperature_from_entropy(
        &self,
        p_bar: f64,
        s_target: f64,
        region: Region,
    ) -> Result<f64, PropertyError> {
        let t_sat = self.saturation_temperature(p_bar)?;
        let bracket = match region {
            Region::Liquid => [LIQUID_T_MIN_C, t_sat],
            Region::Vapor => [t_sat, VAPOR_T_MAX_C],
        };
        let root = find_root(
            |t| -> Result<f64, PropertyError> {
                let props = match region {
                    Region::Liquid => self.liquid(p_bar, t)?,
                    Region::Vapor => self.vapor(p_bar, t)?,
                };
                Ok(props.entropy - s_target)
            },
            bracket,
            &self.inverse_config(),
        )?;
        Ok(root.x)
    }

    /// 등엔트로피 팽창/압축 결과점의 온도와 상을 판정한다.
    ///
    /// 포화 액/증기 엔트로피와 비교해 영역을 고르고, 2상이면 포화온도와
    /// 엔트로피 기준 건도를 돌려준다.
    fn isentropic_point(&self, p_bar: f64, s_target: f64) -> Result<(f64, Phase), PropertyError> {
        let t_sat = self.saturation_temperature(p_bar)?;
        let s_f = self.liquid(p_bar, t_sat)?.entropy;
        let s_g = self.vapor(p_bar, t_sat)?.entropy;
        if s_target <= s_f {
            let t = self.temperature_from_entropy(p_bar, s_target, Region::Liquid)?;
            Ok((t, Phase::Liquid))
        } else if s_target >= s_g {
            let t = self.temperature_from_entropy(p_bar, s_target, Region::Vapor)?;
            Ok((t, Phase::Vapor))
        } else {
            let quality = (s_target - s_f) / (s_g - s_f);
            Ok((t_sat, Phase::Saturated { quality }))
        }
    }
}

/// 공기(배가스) 물성 서비스. 정비열 모델을 가정한다.
pub trait GasProperties {
    /// 압력·온도 기준 h/s.
    fn gas(&self, p_bar: f64, t_c: f64) -> Result<SpecificState, PropertyError>;

    /// 정압비열(kJ/kg·K).
    fn cp(&self) -> f64;

    /// 비열비 k = cp/cv.
    fn heat_capacity_ratio(&self) -> f64;

    /// 압력비 `r`에 대한 등엔트로피 온도비 r^((k-1)/k).
    fn isentropic_temperature_ratio(&self, pressure_ratio: f64) -> f64 {
        let k = self.heat_capacity_ratio();
        pressure_ratio.powf((k - 1.0) / k)
    }
}
