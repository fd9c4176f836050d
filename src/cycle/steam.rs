//! 3압력 재열 랭킨 사이클(15개 상태점).
//!
//! 상태점은 배관 계통 순서대로 계산한다: 복수기 → 저압 펌프 → 저압 드럼 →
//! 저압 터빈 → 중압 계통 → 고압 계통 → 고압 터빈 출구. 각 점은 압력을 먼저
//! 정하고, 온도는 포화온도·설계값이거나 상류점 엔트로피를 맞추는 역계산으로
//! 구한다. 터빈과 펌프는 등엔트로피로 가정한다.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::mass_flow::{MassFlowInput, MassFlows, PressureLevels};
use super::{CycleError, StatePoint};
use crate::properties::{Phase, Region, WaterProperties};

/// 증기 사이클 상태점 개수.
pub const STEAM_STATIONS: usize = 15;

/// 상태점 표시 라벨(1부터). 데이터 배열과 분리해 둔다.
pub const STEAM_STATION_LABELS: [&str; STEAM_STATIONS] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15",
];

/// 증기 사이클 상태점. 값은 0부터 시작하는 배열 인덱스이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Station {
    CondenserOutlet = 0,
    LpPumpOutlet,
    LpDrumLiquid,
    LpDrumVapor,
    LpSuperheaterOutlet,
    LpTurbineExhaust,
    IpPumpOutlet,
    IpDrumLiquid,
    IpDrumVapor,
    IpSuperheaterOutlet,
    HpPumpOutlet,
    HpDrumLiquid,
    HpDrumVapor,
    HpSuperheaterOutlet,
    HpTurbineExhaust,
}

impl Station {
    pub const ALL: [Station; STEAM_STATIONS] = [
        Station::CondenserOutlet,
        Station::LpPumpOutlet,
        Station::LpDrumLiquid,
        Station::LpDrumVapor,
        Station::LpSuperheaterOutlet,
        Station::LpTurbineExhaust,
        Station::IpPumpOutlet,
        Station::IpDrumLiquid,
        Station::IpDrumVapor,
        Station::IpSuperheaterOutlet,
        Station::HpPumpOutlet,
        Station::HpDrumLiquid,
        Station::HpDrumVapor,
        Station::HpSuperheaterOutlet,
        Station::HpTurbineExhaust,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// 계통도상의 상태점 번호(1부터).
    pub fn label(self) -> &'static str {
        STEAM_STATION_LABELS[self.index()]
    }
}

/// 증기 사이클 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteamCycleInput {
    /// 고압(bar abs)
    pub hp_bar: f64,
    /// 중압(bar abs)
    pub ip_bar: f64,
    /// 저압(bar abs)
    pub lp_bar: f64,
    /// 저압 증발 유량 m1(kg/s)
    pub mass_flow_1: f64,
    /// 중압 유량 m2(kg/s)
    pub mass_flow_2: f64,
    /// 고압 유량 m3(kg/s)
    pub mass_flow_3: f64,
    /// 저압 터빈 앞 보조 추기량(kg/s)
    pub aux_extraction: f64,
    /// 고압 과열 온도(°C)
    pub superheat_temp_c: f64,
    /// 복수기 온도(°C)
    pub condenser_temp_c: f64,
    /// 저압 터빈 출구 건도
    pub exhaust_quality: f64,
}

impl Default for SteamCycleInput {
    fn default() -> Self {
        Self {
            hp_bar: 165.0,
            ip_bar: 8.0,
            lp_bar: 4.0,
            mass_flow_1: 48.0,
            mass_flow_2: 6.0,
            mass_flow_3: 54.0,
            aux_extraction: 39.68,
            superheat_temp_c: 565.0,
            condenser_temp_c: 15.0,
            exhaust_quality: 0.9,
        }
    }
}

impl SteamCycleInput {
    fn mass_flow_input(&self) -> MassFlowInput {
        MassFlowInput {
            m1: self.mass_flow_1,
            m2: self.mass_flow_2,
            m3: self.mass_flow_3,
            aux_extraction: self.aux_extraction,
        }
    }

    fn pressure_levels(&self) -> PressureLevels<f64> {
        PressureLevels {
            lp: self.lp_bar,
            ip: self.ip_bar,
            hp: self.hp_bar,
        }
    }
}

/// 펌프·터빈 일과 압력 수준별 흡열량(kW).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteamEnergy {
    pub lp_pump: f64,
    pub ip_pump: f64,
    pub hp_pump: f64,
    pub hp_turbine: f64,
    pub ip_turbine: f64,
    pub lp_turbine: f64,
    /// 압력 수준별 절탄기+증발기+과열기 흡열량
    pub heat_input: PressureLevels<f64>,
    pub total_heat_input: f64,
    pub net_work: f64,
    pub efficiency: f64,
}

impl SteamEnergy {
    fn from_states(states: &[StatePoint; STEAM_STATIONS], flows: &MassFlows) -> Self {
        use Station::*;
        let h = |station: Station| states[station.index()].enthalpy;

        let lp_pump = flows.lp_pump * (h(LpPumpOutlet) - h(CondenserOutlet));
        let ip_pump = flows.ip_pump * (h(IpPumpOutlet) - h(LpDrumLiquid));
        let hp_pump = flows.hp_pump * (h(HpPumpOutlet) - h(LpDrumLiquid));
        let hp_turbine = flows.hp_turbine * (h(HpSuperheaterOutlet) - h(HpTurbineExhaust));
        let ip_turbine = flows.ip_turbine * (h(IpSuperheaterOutlet) - h(LpSuperheaterOutlet));
        let lp_turbine = flows.lp_turbine * (h(LpSuperheaterOutlet) - h(LpTurbineExhaust));

        let heat_input = PressureLevels {
            lp: flows.superheater.lp * (h(LpSuperheaterOutlet) - h(LpDrumVapor))
                + flows.evaporator.lp * (h(LpDrumVapor) - h(LpDrumLiquid))
                + flows.economiser.lp * (h(LpDrumLiquid) - h(LpPumpOutlet)),
            ip: flows.superheater.ip * (h(IpSuperheaterOutlet) - h(IpDrumVapor))
                + flows.evaporator.ip * (h(IpDrumVapor) - h(IpDrumLiquid))
                + flows.economiser.ip * (h(IpDrumLiquid) - h(IpPumpOutlet)),
            hp: flows.superheater.hp * (h(HpSuperheaterOutlet) - h(HpDrumVapor))
                + flows.evaporator.hp * (h(HpDrumVapor) - h(HpDrumLiquid))
                + flows.economiser.hp * (h(HpDrumLiquid) - h(HpPumpOutlet)),
        };
        let total_heat_input = heat_input.sum();
        let net_work = hp_turbine + ip_turbine + lp_turbine - hp_pump - ip_pump - lp_pump;

        Self {
            lp_pump,
            ip_pump,
            hp_pump,
            hp_turbine,
            ip_turbine,
            lp_turbine,
            heat_input,
            total_heat_input,
            net_work,
            efficiency: net_work / total_heat_input,
        }
    }

    /// 내보내기용 (이름, kW) 목록.
    pub fn rows(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("LP Pump work", self.lp_pump),
            ("IP Pump work", self.ip_pump),
            ("HP Pump work", self.hp_pump),
            ("HP Turbine work", self.hp_turbine),
            ("IP Turbine work", self.ip_turbine),
            ("LP Turbine work", self.lp_turbine),
            ("LP Heat Input", self.heat_input.lp),
            ("IP Heat Input", self.heat_input.ip),
            ("HP Heat Input", self.heat_input.hp),
            ("Total Heat Input", self.total_heat_input),
            ("Net Work", self.net_work),
        ]
    }
}

/// 해석된 증기 사이클. 새 운전점은 새 인스턴스로 계산한다.
#[derive(Debug, Clone, PartialEq)]
pub struct SteamCycle {
    input: SteamCycleInput,
    flows: MassFlows,
    states: [StatePoint; STEAM_STATIONS],
    energy: SteamEnergy,
}

impl SteamCycle {
    /// 입력 검증 후 상태점을 계통 순서대로 계산한다.
    /// 물성 서비스 오류는 그대로 [`CycleError::Property`]로 전파된다.
    pub fn solve<W: WaterProperties + ?Sized>(
        input: SteamCycleInput,
        props: &W,
    ) -> Result<Self, CycleError> {
        let flows = MassFlows::allocate(input.mass_flow_input())?;
        if !(0.0..=1.0).contains(&input.exhaust_quality) {
            return Err(CycleError::InvalidInput(format!(
                "터빈 출구 건도는 0~1 사이여야 합니다: {}",
                input.exhaust_quality
            )));
        }

        let t_cond = input.condenser_temp_c;
        let p_cond = props.saturation_pressure(t_cond)?;
        let levels = input.pressure_levels();
        if !(levels.hp > levels.ip && levels.ip > levels.lp && levels.lp > p_cond) {
            return Err(CycleError::InvalidPressureLevels {
                hp_bar: levels.hp,
                ip_bar: levels.ip,
                lp_bar: levels.lp,
                condenser_bar: p_cond,
            });
        }
        let t_sat_hp = props.saturation_temperature(levels.hp)?;
        if input.superheat_temp_c <= t_sat_hp {
            return Err(CycleError::InvalidInput(format!(
                "과열 온도 {} °C가 고압 포화온도 {:.1} °C 이하입니다",
                input.superheat_temp_c, t_sat_hp
            )));
        }

        // 저압 계통
        let s1 = StatePoint::water(props, p_cond, t_cond, Phase::Liquid)?;
        let s2 = pumped(props, levels.lp, s1.entropy)?;
        let s3 = drum(props, levels.lp, 0.0)?;
        let s4 = drum(props, levels.lp, 1.0)?;
        let s6 = StatePoint::water(
            props,
            p_cond,
            t_cond,
            Phase::Saturated {
                quality: input.exhaust_quality,
            },
        )?;
        let s5 = expanded(props, levels.lp, s6.entropy)?;

        // 중압 계통
        let s7 = pumped(props, levels.ip, s3.entropy)?;
        let s8 = drum(props, levels.ip, 0.0)?;
        let s9 = drum(props, levels.ip, 1.0)?;
        let s10 = expanded(props, levels.ip, s5.entropy)?;

        // 고압 계통
        let s11 = pumped(props, levels.hp, s3.entropy)?;
        let s12 = drum(props, levels.hp, 0.0)?;
        let s13 = drum(props, levels.hp, 1.0)?;
        let s14 = StatePoint::water(props, levels.hp, input.superheat_temp_c, Phase::Vapor)?;
        let s15 = expanded(props, levels.ip, s14.entropy)?;

        let states = [
            s1, s2, s3, s4, s5, s6, s7, s8, s9, s10, s11, s12, s13, s14, s15,
        ];
        for station in Station::ALL {
            let st = &states[station.index()];
            debug!(
                station = station.label(),
                p_bar = st.pressure_bar,
                t_c = st.temperature_c,
                h = st.enthalpy,
                s = st.entropy,
                "증기 사이클 상태점"
            );
        }

        let energy = SteamEnergy::from_states(&states, &flows);
        info!(
            net_work_kw = energy.net_work,
            heat_input_kw = energy.total_heat_input,
            efficiency = energy.efficiency,
            "증기 사이클 해석 완료"
        );

        Ok(Self {
            input,
            flows,
            states,
            energy,
        })
    }

    pub fn input(&self) -> &SteamCycleInput {
        &self.input
    }

    pub fn flows(&self) -> &MassFlows {
        &self.flows
    }

    pub fn states(&self) -> &[StatePoint; STEAM_STATIONS] {
        &self.states
    }

    pub fn state(&self, station: Station) -> &StatePoint {
        &self.states[station.index()]
    }

    pub fn energy(&self) -> &SteamEnergy {
        &self.energy
    }

    /// HRSG 전체 흡열량(kW).
    pub fn heat_input(&self) -> f64 {
        self.energy.total_heat_input
    }

    pub fn net_work(&self) -> f64 {
        self.energy.net_work
    }

    pub fn efficiency(&self) -> f64 {
        self.energy.efficiency
    }
}

/// 등엔트로피 펌프 출구: 압축수 영역에서 입구 엔트로피를 맞추는 온도.
fn pumped<W: WaterProperties + ?Sized>(
    props: &W,
    p_bar: f64,
    s_in: f64,
) -> Result<StatePoint, CycleError> {
    let t = props.temperature_from_entropy(p_bar, s_in, Region::Liquid)?;
    Ok(StatePoint::water(props, p_bar, t, Phase::Liquid)?)
}

/// 드럼 포화점. 건도 0은 포화수, 1은 포화증기.
fn drum<W: WaterProperties + ?Sized>(
    props: &W,
    p_bar: f64,
    quality: f64,
) -> Result<StatePoint, CycleError> {
    let t_sat = props.saturation_temperature(p_bar)?;
    Ok(StatePoint::water(
        props,
        p_bar,
        t_sat,
        Phase::Saturated { quality },
    )?)
}

/// 등엔트로피 팽창(또는 역방향) 결과점. 상은 엔트로피로 판정한다.
fn expanded<W: WaterProperties + ?Sized>(
    props: &W,
    p_bar: f64,
    s_in: f64,
) -> Result<StatePoint, CycleError> {
    let (t, phase) = props.isentropic_point(p_bar, s_in)?;
    Ok(StatePoint::water(props, p_bar, t, phase)?)
}
