//! 4점 브레이턴 사이클(압축기 입구 → 압축기 출구 → 연소기 출구 → 터빈 출구).
//!
//! 온도는 °C, 압력은 bar(abs). 일·열량은 정비열 cp 기준 kW로 계산하고,
//! 상태점 h/s는 공기 물성 서비스에서 얻는다.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{CycleError, StatePoint};
use crate::properties::GasProperties;
use crate::units::{to_celsius, to_kelvin};

/// 가스터빈 상태점 개수.
pub const GAS_TURBINE_STATIONS: usize = 4;

/// 상태점 표시 라벨(1부터).
pub const GAS_TURBINE_STATION_LABELS: [&str; GAS_TURBINE_STATIONS] = ["1", "2", "3", "4"];

/// 대기 조건. 압축기 입구이자 터빈 배기 압력이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientConditions {
    /// 대기 온도(°C)
    pub temperature_c: f64,
    /// 대기 압력(bar abs)
    pub pressure_bar: f64,
}

impl Default for AmbientConditions {
    fn default() -> Self {
        Self {
            temperature_c: 8.0,
            pressure_bar: 1.0,
        }
    }
}

/// 가스터빈 운전 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasTurbineInput {
    /// 연료 유량(kg/s)
    pub fuel_flow: f64,
    /// 공기/연료 질량비
    pub air_fuel_ratio: f64,
    /// 연료 저위발열량(kJ/kg)
    pub lhv_kj_per_kg: f64,
    /// 압축기 압력비
    pub pressure_ratio: f64,
    /// 터빈 등엔트로피 효율 (0, 1]
    pub turbine_efficiency: f64,
    /// 압축기 등엔트로피 효율 (0, 1]
    pub compressor_efficiency: f64,
}

impl Default for GasTurbineInput {
    fn default() -> Self {
        Self {
            fuel_flow: 14.2,
            air_fuel_ratio: 50.0,
            lhv_kj_per_kg: 50_000.0,
            pressure_ratio: 20.1,
            turbine_efficiency: 0.85,
            compressor_efficiency: 0.85,
        }
    }
}

impl GasTurbineInput {
    /// 등엔트로피 효율 1(이상 사이클)로 입력을 만든다.
    pub fn ideal(fuel_flow: f64, air_fuel_ratio: f64, lhv_kj_per_kg: f64, pressure_ratio: f64) -> Self {
        Self {
            fuel_flow,
            air_fuel_ratio,
            lhv_kj_per_kg,
            pressure_ratio,
            turbine_efficiency: 1.0,
            compressor_efficiency: 1.0,
        }
    }

    /// 터빈/압축기 효율을 바꾼 입력.
    pub fn with_efficiencies(mut self, turbine: f64, compressor: f64) -> Self {
        self.turbine_efficiency = turbine;
        self.compressor_efficiency = compressor;
        self
    }

    fn validate(&self) -> Result<(), CycleError> {
        let positive = [
            ("연료 유량", self.fuel_flow),
            ("공기/연료비", self.air_fuel_ratio),
            ("저위발열량", self.lhv_kj_per_kg),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(CycleError::InvalidInput(format!("{name} 값은 양수여야 합니다: {value}")));
            }
        }
        if !(self.pressure_ratio.is_finite() && self.pressure_ratio > 1.0) {
            return Err(CycleError::InvalidInput(format!(
                "압력비는 1보다 커야 합니다: {}",
                self.pressure_ratio
            )));
        }
        for (name, eta) in [
            ("터빈 효율", self.turbine_efficiency),
            ("압축기 효율", self.compressor_efficiency),
        ] {
            if !(eta > 0.0 && eta <= 1.0) {
                return Err(CycleError::InvalidInput(format!("{name} 값은 (0, 1] 범위여야 합니다: {eta}")));
            }
        }
        Ok(())
    }
}

/// 가스터빈 일·열량(kW).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasTurbineWork {
    pub turbine: f64,
    pub compressor: f64,
    pub heat_input: f64,
    pub net_work: f64,
}

impl GasTurbineWork {
    /// 내보내기용 (이름, kW) 목록.
    pub fn rows(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("turbine", self.turbine),
            ("compressor", self.compressor),
            ("heat in", self.heat_input),
            ("Net Work", self.net_work),
        ]
    }
}

/// 해석된 가스터빈 사이클. 생성 후에는 바뀌지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct GasTurbine {
    input: GasTurbineInput,
    ambient: AmbientConditions,
    air_mass_flow: f64,
    total_mass_flow: f64,
    states: [StatePoint; GAS_TURBINE_STATIONS],
    isentropic_compressor_outlet_c: f64,
    isentropic_turbine_outlet_c: f64,
    work: GasTurbineWork,
    efficiency: f64,
}

impl GasTurbine {
    /// 입력과 대기 조건, 공기 모델로 사이클을 해석한다.
    pub fn solve<G: GasProperties + ?Sized>(
        input: GasTurbineInput,
        ambient: AmbientConditions,
        air: &G,
    ) -> Result<Self, CycleError> {
        input.validate()?;
        if !(ambient.pressure_bar > 0.0) {
            return Err(CycleError::InvalidInput(format!(
                "대기 압력은 양수여야 합니다: {}",
                ambient.pressure_bar
            )));
        }

        let cp = air.cp();
        let r = input.pressure_ratio;
        let air_mass_flow = input.fuel_flow * input.air_fuel_ratio;
        let total_mass_flow = input.fuel_flow * (1.0 + input.air_fuel_ratio);

        let t1 = ambient.temperature_c;
        let t2s = isentropic_temperature(air, t1, r);
        let t2 = t1 + (t2s - t1) / input.compressor_efficiency;
        let t3 = t2 + (input.fuel_flow * input.lhv_kj_per_kg) / (total_mass_flow * cp);
        let t4s = isentropic_temperature(air, t3, 1.0 / r);
        let t4 = t3 - input.turbine_efficiency * (t3 - t4s);

        let p1 = ambient.pressure_bar;
        let p2 = p1 * r;
        let states = [
            StatePoint::gas(air, p1, t1)?,
            StatePoint::gas(air, p2, t2)?,
            StatePoint::gas(air, p2, t3)?,
            StatePoint::gas(air, p1, t4)?,
        ];
        for (label, state) in GAS_TURBINE_STATION_LABELS.iter().zip(&states) {
            debug!(
                station = *label,
                p_bar = state.pressure_bar,
                t_c = state.temperature_c,
                s = state.entropy,
                "가스터빈 상태점"
            );
        }

        let turbine = total_mass_flow * cp * (t3 - t4);
        let compressor = air_mass_flow * cp * (t2 - t1);
        let heat_input = total_mass_flow * cp * (t3 - t2);
        let work = GasTurbineWork {
            turbine,
            compressor,
            heat_input,
            net_work: turbine - compressor,
        };
        let efficiency = work.net_work / work.heat_input;
        info!(
            net_work_kw = work.net_work,
            efficiency,
            exhaust_c = t4,
            "가스터빈 사이클 해석 완료"
        );

        Ok(Self {
            input,
            ambient,
            air_mass_flow,
            total_mass_flow,
            states,
            isentropic_compressor_outlet_c: t2s,
            isentropic_turbine_outlet_c: t4s,
            work,
            efficiency,
        })
    }

    pub fn input(&self) -> &GasTurbineInput {
        &self.input
    }

    pub fn ambient(&self) -> &AmbientConditions {
        &self.ambient
    }

    /// 상태점 1~4 (0부터 저장).
    pub fn states(&self) -> &[StatePoint; GAS_TURBINE_STATIONS] {
        &self.states
    }

    /// 등엔트로피 압축 출구 온도 T2s(°C).
    pub fn isentropic_compressor_outlet_c(&self) -> f64 {
        self.isentropic_compressor_outlet_c
    }

    /// 등엔트로피 팽창 출구 온도 T4s(°C).
    pub fn isentropic_turbine_outlet_c(&self) -> f64 {
        self.isentropic_turbine_outlet_c
    }

    pub fn air_mass_flow(&self) -> f64 {
        self.air_mass_flow
    }

    /// 연소가스(공기+연료) 유량(kg/s).
    pub fn total_mass_flow(&self) -> f64 {
        self.total_mass_flow
    }

    /// 배기(HRSG 입구) 온도(°C).
    pub fn exhaust_temperature_c(&self) -> f64 {
        self.states[3].temperature_c
    }

    pub fn work(&self) -> &GasTurbineWork {
        &self.work
    }

    pub fn net_work(&self) -> f64 {
        self.work.net_work
    }

    /// 열효율 = 순일 / 연소 열량.
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }
}

/// 이상기체 등엔트로피 관계 T2 = T1·r^((k-1)/k). 입출력은 °C.
fn isentropic_temperature<G: GasProperties + ?Sized>(air: &G, t_ref_c: f64, pressure_ratio: f64) -> f64 {
    to_celsius(to_kelvin(t_ref_c) * air.isentropic_temperature_ratio(pressure_ratio))
}
