use approx::assert_relative_eq;

use combined_cycle_toolbox::cycle::{
    CycleError, MassFlowInput, MassFlows, Station, SteamCycle, SteamCycleInput,
};
use combined_cycle_toolbox::properties::{If97, Phase, WaterProperties};

fn solve(input: SteamCycleInput) -> Result<SteamCycle, CycleError> {
    SteamCycle::solve(input, &If97::new())
}

#[test]
fn reference_scenario() {
    let cycle = solve(SteamCycleInput::default()).expect("steam cycle");
    let water = If97::new();

    let cond = cycle.state(Station::CondenserOutlet);
    assert_relative_eq!(cond.temperature_c, 15.0);
    assert_eq!(cond.phase, Phase::Liquid);

    let exhaust = cycle.state(Station::LpTurbineExhaust);
    assert_eq!(exhaust.quality(), Some(0.9));
    assert_relative_eq!(exhaust.pressure_bar, cond.pressure_bar);

    let hp = cycle.state(Station::HpSuperheaterOutlet);
    assert_relative_eq!(hp.temperature_c, 565.0);
    assert_relative_eq!(hp.pressure_bar, 165.0);

    // 드럼 상태는 해당 압력의 포화온도
    for (station, p) in [
        (Station::LpDrumLiquid, 4.0),
        (Station::IpDrumVapor, 8.0),
        (Station::HpDrumLiquid, 165.0),
    ] {
        let t_sat = water.saturation_temperature(p).expect("tsat");
        assert_relative_eq!(cycle.state(station).temperature_c, t_sat, epsilon = 1e-9);
    }

    // 펌프와 터빈은 등엔트로피
    let pairs = [
        (Station::CondenserOutlet, Station::LpPumpOutlet),
        (Station::LpDrumLiquid, Station::IpPumpOutlet),
        (Station::LpDrumLiquid, Station::HpPumpOutlet),
        (Station::LpTurbineExhaust, Station::LpSuperheaterOutlet),
        (Station::LpSuperheaterOutlet, Station::IpSuperheaterOutlet),
        (Station::HpSuperheaterOutlet, Station::HpTurbineExhaust),
    ];
    for (a, b) in pairs {
        assert_relative_eq!(
            cycle.state(a).entropy,
            cycle.state(b).entropy,
            max_relative = 1e-4
        );
    }

    // 고압 터빈 출구는 습증기
    assert!(matches!(
        cycle.state(Station::HpTurbineExhaust).phase,
        Phase::Saturated { .. }
    ));
    assert!(cycle.state(Station::IpSuperheaterOutlet).temperature_c > 450.0);
}

#[test]
fn pressure_levels_are_ordered() {
    let cycle = solve(SteamCycleInput::default()).expect("steam cycle");
    let p = |s: Station| cycle.state(s).pressure_bar;
    assert!(p(Station::HpDrumVapor) > p(Station::IpDrumVapor));
    assert!(p(Station::IpDrumVapor) > p(Station::LpDrumVapor));
    assert!(p(Station::LpDrumVapor) > p(Station::CondenserOutlet));
}

#[test]
fn energy_balance() {
    let cycle = solve(SteamCycleInput::default()).expect("steam cycle");
    let e = cycle.energy();

    assert!(e.net_work > 0.0);
    assert!(cycle.efficiency() > 0.0 && cycle.efficiency() < 1.0);
    assert_relative_eq!(
        e.net_work,
        e.hp_turbine + e.ip_turbine + e.lp_turbine - e.hp_pump - e.ip_pump - e.lp_pump,
        max_relative = 1e-12
    );
    assert_relative_eq!(e.total_heat_input, e.heat_input.sum(), max_relative = 1e-12);
    assert_relative_eq!(cycle.efficiency(), e.net_work / e.total_heat_input);
    for pump in [e.lp_pump, e.ip_pump, e.hp_pump] {
        assert!(pump > 0.0 && pump < e.lp_turbine);
    }
}

#[test]
fn mass_flow_allocation() {
    let flows = MassFlows::allocate(MassFlowInput {
        m1: 48.0,
        m2: 6.0,
        m3: 54.0,
        aux_extraction: 39.68,
    })
    .expect("allocate");

    assert_relative_eq!(flows.hp_turbine, 54.0);
    assert_relative_eq!(flows.ip_turbine, 60.0);
    assert_relative_eq!(flows.lp_turbine, 68.32, max_relative = 1e-12);
    assert_relative_eq!(flows.lp_pump, 108.0);
    assert_relative_eq!(flows.economiser.lp, 108.0);
    assert_relative_eq!(flows.superheater.ip, 60.0);
    assert_relative_eq!(flows.evaporator.sum(), 108.0);
    assert_eq!(flows.rows().len(), 19);
}

#[test]
fn infeasible_mass_flows_are_rejected() {
    let too_much_extraction = MassFlows::allocate(MassFlowInput {
        m1: 48.0,
        m2: 6.0,
        m3: 54.0,
        aux_extraction: 200.0,
    });
    assert!(matches!(
        too_much_extraction,
        Err(CycleError::InfeasibleMassFlow {
            stream: "LP turbine",
            ..
        })
    ));

    let negative = solve(SteamCycleInput {
        mass_flow_1: -1.0,
        ..SteamCycleInput::default()
    });
    assert!(matches!(
        negative,
        Err(CycleError::InfeasibleMassFlow { .. })
    ));
}

#[test]
fn pressure_order_violation_is_rejected() {
    let err = solve(SteamCycleInput {
        ip_bar: 200.0,
        ..SteamCycleInput::default()
    })
    .expect_err("ip above hp");
    assert!(matches!(err, CycleError::InvalidPressureLevels { .. }), "{err:?}");
}

#[test]
fn invalid_cycle_inputs_are_rejected() {
    let wet_superheat = solve(SteamCycleInput {
        superheat_temp_c: 300.0,
        ..SteamCycleInput::default()
    });
    assert!(matches!(wet_superheat, Err(CycleError::InvalidInput(_))));

    let bad_quality = solve(SteamCycleInput {
        exhaust_quality: 1.5,
        ..SteamCycleInput::default()
    });
    assert!(matches!(bad_quality, Err(CycleError::InvalidInput(_))));
}
