//! 복합발전 플랜트 종합.
//!
//! 가스터빈과 증기 사이클을 각각 해석하고, 가스터빈 배기를 표준 9단 HRSG에
//! 흘려 열교환기 체인과 핀치 다이어그램을 계산한 뒤 종합 효율과 순출력을 낸다.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::config::PlantConfig;
use crate::cycle::{CycleError, GasTurbine, Station, SteamCycle};
use crate::hrsg::{
    energy_balance_outlet, ExchangerKind, ExchangerSpec, HeatExchanger, Hrsg, HrsgError,
    PinchDiagram,
};
use crate::properties::{GasProperties, If97, WaterProperties};

/// HRSG 설정.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HrsgSettings {
    /// 배가스 정압비열(kJ/kg·K)
    pub flue_gas_cp: f64,
    /// 배가스 유량(kg/s). `None`이면 가스터빈 연소가스 유량을 쓴다.
    pub flue_gas_mass_flow: Option<f64>,
    /// 핀치 표시 기준 접근 온도차(K)
    pub pinch_threshold_k: f64,
}

impl Default for HrsgSettings {
    fn default() -> Self {
        Self {
            flue_gas_cp: 1.004,
            flue_gas_mass_flow: None,
            pinch_threshold_k: 50.0,
        }
    }
}

/// 플랜트 해석 오류.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlantError {
    #[error("사이클 해석 오류: {0}")]
    Cycle(#[from] CycleError),
    #[error("HRSG 계산 오류: {0}")]
    Hrsg(#[from] HrsgError),
}

/// 두 열기관을 직렬로 묶은 복합 효율 η_gt + η_st - η_gt·η_st.
pub fn combined_efficiency(gas_turbine: f64, steam_cycle: f64) -> f64 {
    gas_turbine + steam_cycle - gas_turbine * steam_cycle
}

/// 종합 효율·출력 요약.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantSummary {
    pub gas_turbine_efficiency: f64,
    pub steam_cycle_efficiency: f64,
    pub combined_efficiency: f64,
    /// 가스터빈 순출력(kW)
    pub gas_turbine_net_work: f64,
    /// 증기 사이클 순출력(kW)
    pub steam_cycle_net_work: f64,
    /// 플랜트 순출력(kW)
    pub net_work: f64,
}

impl PlantSummary {
    pub fn from_efficiencies_and_work(
        gas_turbine_efficiency: f64,
        steam_cycle_efficiency: f64,
        gas_turbine_net_work: f64,
        steam_cycle_net_work: f64,
    ) -> Self {
        Self {
            gas_turbine_efficiency,
            steam_cycle_efficiency,
            combined_efficiency: combined_efficiency(gas_turbine_efficiency, steam_cycle_efficiency),
            gas_turbine_net_work,
            steam_cycle_net_work,
            net_work: gas_turbine_net_work + steam_cycle_net_work,
        }
    }

    pub fn from_cycles(gas_turbine: &GasTurbine, steam_cycle: &SteamCycle) -> Self {
        Self::from_efficiencies_and_work(
            gas_turbine.efficiency(),
            steam_cycle.efficiency(),
            gas_turbine.net_work(),
            steam_cycle.net_work(),
        )
    }
}

/// 플랜트 해석 결과 전체.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantReport {
    pub gas_turbine: GasTurbine,
    pub steam_cycle: SteamCycle,
    pub hrsg: Hrsg,
    pub pinch: PinchDiagram,
    pub summary: PlantSummary,
    /// HRSG 배가스 유량(kg/s)
    pub flue_gas_mass_flow: f64,
    /// 증기 사이클 흡열량만으로 추정한 배가스 출구 온도(°C)
    pub estimated_flue_outlet_c: f64,
}

/// 증기 사이클 결과로 표준 HRSG 배열을 구성한다.
///
/// 배가스 흐름 순서: 고압 과열기 → 중압 과열기 → 저압 과열기 → 고압 증발기 →
/// 고압 절탄기 → 중압 증발기 → 중압 절탄기 → 저압 증발기 → 저압 절탄기.
pub fn standard_hrsg(
    steam: &SteamCycle,
    inlet_temp_c: f64,
    gas_mass_flow: f64,
    gas_cp: f64,
) -> Result<Hrsg, HrsgError> {
    use Station::*;
    let flows = steam.flows();
    let layout = [
        ("HP Superheater", ExchangerKind::Superheater, HpDrumVapor, HpSuperheaterOutlet, flows.superheater.hp),
        ("IP Superheater", ExchangerKind::Superheater, HpTurbineExhaust, IpSuperheaterOutlet, flows.superheater.ip),
        ("LP Superheater", ExchangerKind::Superheater, LpDrumVapor, LpSuperheaterOutlet, flows.superheater.lp),
        ("HP Evaporator", ExchangerKind::evaporator(), HpDrumLiquid, HpDrumVapor, flows.evaporator.hp),
        ("HP Economiser", ExchangerKind::Economiser, HpPumpOutlet, HpDrumLiquid, flows.economiser.hp),
        ("IP Evaporator", ExchangerKind::evaporator(), IpDrumLiquid, IpDrumVapor, flows.evaporator.ip),
        ("IP Economiser", ExchangerKind::Economiser, IpPumpOutlet, IpDrumLiquid, flows.economiser.ip),
        ("LP Evaporator", ExchangerKind::evaporator(), LpDrumLiquid, LpDrumVapor, flows.evaporator.lp),
        ("LP Economiser", ExchangerKind::Economiser, LpPumpOutlet, LpDrumLiquid, flows.economiser.lp),
    ];

    let mut hrsg = Hrsg::new(inlet_temp_c);
    for (name, kind, cold_in, cold_out, cold_mass_flow) in layout {
        let cold_in = steam.state(cold_in);
        let cold_out = steam.state(cold_out);
        hrsg.add_exchanger(HeatExchanger::new(ExchangerSpec {
            name: name.to_string(),
            kind,
            pressure_bar: cold_out.pressure_bar,
            cold_in_c: cold_in.temperature_c,
            cold_out_c: cold_out.temperature_c,
            cold_mass_flow,
            hot_mass_flow: gas_mass_flow,
            hot_cp: gas_cp,
            hot_in_c: None,
        })?);
    }
    Ok(hrsg)
}

/// 기본 물성 서비스(IF97 + 설정의 공기 모델)로 플랜트를 해석한다.
pub fn evaluate(config: &PlantConfig) -> Result<PlantReport, PlantError> {
    evaluate_with(config, &If97::new(), &config.air)
}

/// 주어진 물성 서비스로 플랜트를 해석한다.
pub fn evaluate_with<W, G>(config: &PlantConfig, water: &W, air: &G) -> Result<PlantReport, PlantError>
where
    W: WaterProperties + ?Sized,
    G: GasProperties + ?Sized,
{
    let gas_turbine = GasTurbine::solve(config.gas_turbine, config.ambient, air)?;
    let steam_cycle = SteamCycle::solve(config.steam, water)?;

    let settings = &config.hrsg;
    let flue_in_c = gas_turbine.exhaust_temperature_c();
    let flue_gas_mass_flow = settings
        .flue_gas_mass_flow
        .unwrap_or_else(|| gas_turbine.total_mass_flow());
    let estimated_flue_outlet_c = energy_balance_outlet(
        flue_in_c,
        steam_cycle.heat_input(),
        flue_gas_mass_flow,
        settings.flue_gas_cp,
    );

    let mut hrsg = standard_hrsg(&steam_cycle, flue_in_c, flue_gas_mass_flow, settings.flue_gas_cp)?;
    hrsg.calculate(water)?;
    let pinch = hrsg.pinch_diagram(settings.pinch_threshold_k)?;

    let summary = PlantSummary::from_cycles(&gas_turbine, &steam_cycle);
    info!(
        combined_efficiency = summary.combined_efficiency,
        net_work_kw = summary.net_work,
        hrsg_outlet_c = hrsg.outlet_temperature()?,
        estimated_flue_outlet_c,
        "플랜트 해석 완료"
    );

    Ok(PlantReport {
        gas_turbine,
        steam_cycle,
        hrsg,
        pinch,
        summary,
        flue_gas_mass_flow,
        estimated_flue_outlet_c,
    })
}
