//! 가스터빈(브레이턴)·증기(랭킨) 사이클 상태점 해석.

pub mod gas_turbine;
pub mod mass_flow;
pub mod steam;

pub use gas_turbine::{AmbientConditions, GasTurbine, GasTurbineInput, GasTurbineWork};
pub use mass_flow::{MassFlowInput, MassFlows, PressureLevels};
pub use steam::{Station, SteamCycle, SteamCycleInput, SteamEnergy};

use thiserror::Error;

use crate::properties::{GasProperties, Phase, PropertyError, WaterProperties};

/// 사이클 상태점. 압력·온도·상을 먼저 정하고 h/s는 물성 서비스로만 구한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatePoint {
    /// 압력(bar abs)
    pub pressure_bar: f64,
    /// 온도(°C)
    pub temperature_c: f64,
    pub phase: Phase,
    /// 비엔탈피(kJ/kg)
    pub enthalpy: f64,
    /// 비엔트로피(kJ/kg·K)
    pub entropy: f64,
}

impl StatePoint {
    /// 물/증기 상태점.
    pub fn water<W: WaterProperties + ?Sized>(
        props: &W,
        pressure_bar: f64,
        temperature_c: f64,
        phase: Phase,
    ) -> Result<Self, PropertyError> {
        let s = props.state(pressure_bar, temperature_c, phase)?;
        Ok(Self {
            pressure_bar,
            temperature_c,
            phase,
            enthalpy: s.enthalpy,
            entropy: s.entropy,
        })
    }

    /// 공기 상태점. 상은 기체로 고정한다.
    pub fn gas<G: GasProperties + ?Sized>(
        props: &G,
        pressure_bar: f64,
        temperature_c: f64,
    ) -> Result<Self, PropertyError> {
        let s = props.gas(pressure_bar, temperature_c)?;
        Ok(Self {
            pressure_bar,
            temperature_c,
            phase: Phase::Vapor,
            enthalpy: s.enthalpy,
            entropy: s.entropy,
        })
    }

    /// 포화 혼합물이면 건도를 돌려준다.
    pub fn quality(&self) -> Option<f64> {
        match self.phase {
            Phase::Saturated { quality } => Some(quality),
            _ => None,
        }
    }
}

/// 사이클 해석 오류.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CycleError {
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    #[error(
        "압력 수준은 HP > IP > LP > 복수기 포화압력 순이어야 합니다 \
         (HP={hp_bar}, IP={ip_bar}, LP={lp_bar}, 복수기={condenser_bar:.4} bar)"
    )]
    InvalidPressureLevels {
        hp_bar: f64,
        ip_bar: f64,
        lp_bar: f64,
        condenser_bar: f64,
    },

    #[error("유량 분배가 불가능합니다: {stream} = {value} kg/s")]
    InfeasibleMassFlow { stream: &'static str, value: f64 },

    #[error(transparent)]
    Property(#[from] PropertyError),
}
