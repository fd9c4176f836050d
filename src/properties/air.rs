//! 정비열 이상기체 공기 모델.
//!
//! 기준 상태(0 °C, 1.01325 bar)에서 h = 0, s = 0으로 둔다.
//! h = cp (T - T_ref), s = cp ln(T/T_ref) - R ln(p/p_ref), R = cp (k - 1) / k.

use serde::{Deserialize, Serialize};

use super::{GasProperties, PropertyError, SpecificState};
use crate::units::to_kelvin;

/// 공기 물성 설정.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdealGasAir {
    /// 정압비열(kJ/kg·K)
    pub cp: f64,
    /// 비열비 k
    pub gamma: f64,
    /// 기준 온도(°C)
    pub reference_temperature_c: f64,
    /// 기준 압력(bar abs)
    pub reference_pressure_bar: f64,
}

impl Default for IdealGasAir {
    fn default() -> Self {
        Self {
            cp: 1.004,
            gamma: 1.4,
            reference_temperature_c: 0.0,
            reference_pressure_bar: 1.01325,
        }
    }
}

impl IdealGasAir {
    /// 기체상수 R(kJ/kg·K).
    pub fn gas_constant(&self) -> f64 {
        self.cp * (self.gamma - 1.0) / self.gamma
    }
}

impl GasProperties for IdealGasAir {
    fn gas(&self, p_bar: f64, t_c: f64) -> Result<SpecificState, PropertyError> {
        if p_bar <= 0.0 {
            return Err(PropertyError::NonPositivePressure(p_bar));
        }
        let t_k = to_kelvin(t_c);
        if t_k <= 0.0 {
            return Err(PropertyError::TemperatureOutOfRange {
                what: "절대온도는 양수여야 합니다",
                t_c,
            });
        }
        let t_ref_k = to_kelvin(self.reference_temperature_c);
        let enthalpy = self.cp * (t_c - self.reference_temperature_c);
        let entropy = self.cp * (t_k / t_ref_k).ln()
            - self.gas_constant() * (p_bar / self.reference_pressure_bar).ln();
        Ok(SpecificState { enthalpy, entropy })
    }

    fn cp(&self) -> f64 {
        self.cp
    }

    fn heat_capacity_ratio(&self) -> f64 {
        self.gamma
    }
}
