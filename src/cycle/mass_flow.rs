//! 배관 구성에 따른 유량 분배.
//!
//! 독립 입력은 저압 증발 유량 m1, 중압 유량 m2, 고압 유량 m3와
//! 저압 터빈 앞 보조 추기량(예: 탄소포집 설비 공급 증기)이다.

use serde::{Deserialize, Serialize};

use super::CycleError;

/// 저압/중압/고압 세 압력 수준별 값.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PressureLevels<T> {
    pub lp: T,
    pub ip: T,
    pub hp: T,
}

impl PressureLevels<f64> {
    pub fn sum(&self) -> f64 {
        self.lp + self.ip + self.hp
    }
}

/// 독립 유량 입력(kg/s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassFlowInput {
    pub m1: f64,
    pub m2: f64,
    pub m3: f64,
    /// 보조 추기량
    pub aux_extraction: f64,
}

/// 터빈·펌프·HRSG 구간별로 분배된 유량(kg/s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassFlows {
    pub input: MassFlowInput,
    pub hp_turbine: f64,
    pub ip_turbine: f64,
    pub lp_turbine: f64,
    pub hp_pump: f64,
    pub ip_pump: f64,
    pub lp_pump: f64,
    pub economiser: PressureLevels<f64>,
    pub evaporator: PressureLevels<f64>,
    pub superheater: PressureLevels<f64>,
}

impl MassFlows {
    /// 독립 유량을 구간별 유량으로 분배한다. 음수 유량이 나오면 배관 구성상
    /// 불가능한 운전점이므로 오류를 돌려준다.
    pub fn allocate(input: MassFlowInput) -> Result<Self, CycleError> {
        let MassFlowInput {
            m1,
            m2,
            m3,
            aux_extraction,
        } = input;
        for (stream, value) in [
            ("mass flow 1", m1),
            ("mass flow 2", m2),
            ("mass flow 3", m3),
            ("aux extraction", aux_extraction),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CycleError::InfeasibleMassFlow { stream, value });
            }
        }

        let total = m1 + m2 + m3;
        let hp_turbine = m3;
        let ip_turbine = hp_turbine + m2;
        let lp_turbine = ip_turbine + m1 - aux_extraction;
        if lp_turbine < 0.0 {
            return Err(CycleError::InfeasibleMassFlow {
                stream: "LP turbine",
                value: lp_turbine,
            });
        }

        Ok(Self {
            input,
            hp_turbine,
            ip_turbine,
            lp_turbine,
            hp_pump: m3,
            ip_pump: m2,
            lp_pump: m2 + m3 + m1,
            economiser: PressureLevels {
                lp: total,
                ip: m2,
                hp: m3,
            },
            evaporator: PressureLevels {
                lp: m1,
                ip: m2,
                hp: m3,
            },
            superheater: PressureLevels {
                lp: m1,
                ip: m2 + m3,
                hp: m3,
            },
        })
    }

    /// 내보내기용 (이름, kg/s) 목록.
    pub fn rows(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("mass flow 1", self.input.m1),
            ("mass flow 2", self.input.m2),
            ("mass flow 3", self.input.m3),
            ("mass flow to aux extraction", self.input.aux_extraction),
            ("HP turbine", self.hp_turbine),
            ("IP turbine", self.ip_turbine),
            ("LP turbine", self.lp_turbine),
            ("HP pump", self.hp_pump),
            ("IP pump", self.ip_pump),
            ("LP pump", self.lp_pump),
            ("LP economiser", self.economiser.lp),
            ("IP economiser", self.economiser.ip),
            ("HP economiser", self.economiser.hp),
            ("LP evaporator", self.evaporator.lp),
            ("IP evaporator", self.evaporator.ip),
            ("HP evaporator", self.evaporator.hp),
            ("LP superheater", self.superheater.lp),
            ("IP superheater", self.superheater.ip),
            ("HP superheater", self.superheater.hp),
        ]
    }
}
