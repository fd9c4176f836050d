use approx::assert_relative_eq;

use combined_cycle_toolbox::hrsg::{
    energy_balance_outlet, log_mean, ExchangerKind, ExchangerSpec, HeatExchanger, Hrsg, HrsgError,
};
use combined_cycle_toolbox::properties::{If97, WaterProperties};

const GAS_FLOW: f64 = 50.0;
const GAS_CP: f64 = 1.1;

fn spec(name: &str, kind: ExchangerKind, cold_in_c: f64, cold_out_c: f64) -> ExchangerSpec {
    ExchangerSpec {
        name: name.to_string(),
        kind,
        pressure_bar: 10.0,
        cold_in_c,
        cold_out_c,
        cold_mass_flow: 5.0,
        hot_mass_flow: GAS_FLOW,
        hot_cp: GAS_CP,
        hot_in_c: None,
    }
}

/// 10 bar 드럼 하나짜리 과열기-증발기-절탄기 체인.
fn single_drum_chain(inlet_c: f64) -> Hrsg {
    let t_sat = If97::new().saturation_temperature(10.0).expect("tsat");
    let mut hrsg = Hrsg::new(inlet_c);
    for s in [
        spec("Superheater", ExchangerKind::Superheater, 180.0, 350.0),
        spec("Evaporator", ExchangerKind::evaporator(), t_sat, t_sat),
        spec("Economiser", ExchangerKind::Economiser, 60.0, 175.0),
    ] {
        hrsg.add_exchanger(HeatExchanger::new(s).expect("exchanger"));
    }
    hrsg
}

#[test]
fn single_economiser() {
    let water = If97::new();
    let mut eco = HeatExchanger::new(ExchangerSpec {
        name: "Economiser".into(),
        kind: ExchangerKind::Economiser,
        pressure_bar: 10.0,
        cold_in_c: 100.0,
        cold_out_c: 150.0,
        cold_mass_flow: 2.0,
        hot_mass_flow: 10.0,
        hot_cp: 1.004,
        hot_in_c: Some(400.0),
    })
    .expect("economiser");

    let result = *eco.calculate(&water).expect("calculate");
    let h_in = water.liquid(10.0, 100.0).expect("h_in").enthalpy;
    let h_out = water.liquid(10.0, 150.0).expect("h_out").enthalpy;

    assert_relative_eq!(result.duty_kw, 2.0 * (h_out - h_in), max_relative = 1e-12);
    assert_relative_eq!(
        result.hot_out_c,
        400.0 - 2.0 * (h_out - h_in) / (10.0 * 1.004),
        max_relative = 1e-12
    );
    assert!(result.hot_out_c < 400.0 && result.duty_kw > 0.0);
    let lmtd = result.lmtd_k.expect("no temperature cross");
    let (d_hot, d_cold): (f64, f64) = (400.0 - 150.0, result.hot_out_c - 100.0);
    assert!(lmtd >= d_hot.min(d_cold) && lmtd <= d_hot.max(d_cold));
    assert_eq!(eco.hot_outlet(), Ok(result.hot_out_c));
    assert_eq!(eco.duty(), Ok(result.duty_kw));
}

#[test]
fn queries_before_calculation_fail() {
    let mut eco = HeatExchanger::new(spec("Economiser", ExchangerKind::Economiser, 60.0, 175.0))
        .expect("economiser");
    assert_eq!(eco.duty(), Err(HrsgError::NotCalculated("Economiser".into())));
    assert_eq!(
        eco.calculate(&If97::new()).map(|r| r.duty_kw),
        Err(HrsgError::HotInletNotSet("Economiser".into()))
    );

    let hrsg = single_drum_chain(500.0);
    assert!(matches!(hrsg.total_duty(), Err(HrsgError::NotCalculated(_))));
    assert!(matches!(hrsg.outlet_temperature(), Err(HrsgError::NotCalculated(_))));
    assert!(hrsg.pinch_diagram(10.0).is_err());

    let empty = Hrsg::new(500.0);
    assert!(matches!(empty.pinch_diagram(10.0), Err(HrsgError::NotCalculated(_))));
}

#[test]
fn hot_side_colder_than_cold_inlet_is_rejected() {
    let mut eco = HeatExchanger::new(spec("Economiser", ExchangerKind::Economiser, 60.0, 175.0))
        .expect("economiser");
    let err = eco.set_hot_inlet(50.0).expect_err("too cold");
    assert!(matches!(err, HrsgError::HotSideTooCold { .. }), "{err:?}");
    assert_eq!(eco.hot_inlet(), None);

    let mut hrsg = single_drum_chain(150.0);
    assert!(matches!(
        hrsg.calculate(&If97::new()),
        Err(HrsgError::HotSideTooCold { .. })
    ));
}

#[test]
fn invalid_exchanger_is_rejected() {
    let mut bad = spec("Economiser", ExchangerKind::Economiser, 60.0, 175.0);
    bad.hot_mass_flow = 0.0;
    assert!(matches!(
        HeatExchanger::new(bad),
        Err(HrsgError::InvalidExchanger { .. })
    ));

    let wet = spec(
        "Evaporator",
        ExchangerKind::Evaporator {
            quality_in: 0.0,
            quality_out: 1.5,
        },
        180.0,
        180.0,
    );
    assert!(matches!(
        HeatExchanger::new(wet),
        Err(HrsgError::InvalidExchanger { .. })
    ));
}

#[test]
fn cold_side_must_heat_up() {
    let mut reversed = spec("Economiser", ExchangerKind::Economiser, 150.0, 100.0);
    reversed.hot_in_c = Some(400.0);
    assert!(matches!(
        HeatExchanger::new(reversed),
        Err(HrsgError::InvalidExchanger { .. })
    ));

    let cooled = spec("Superheater", ExchangerKind::Superheater, 350.0, 200.0);
    assert!(matches!(
        HeatExchanger::new(cooled),
        Err(HrsgError::InvalidExchanger { .. })
    ));

    let condensing = spec(
        "Evaporator",
        ExchangerKind::Evaporator {
            quality_in: 1.0,
            quality_out: 0.0,
        },
        180.0,
        180.0,
    );
    assert!(matches!(
        HeatExchanger::new(condensing),
        Err(HrsgError::InvalidExchanger { .. })
    ));
}

#[test]
fn zero_cold_flow_is_rejected() {
    let mut idle = spec("Economiser", ExchangerKind::Economiser, 60.0, 175.0);
    idle.cold_mass_flow = 0.0;
    assert!(matches!(
        HeatExchanger::new(idle),
        Err(HrsgError::InvalidExchanger { .. })
    ));
}

#[test]
fn empty_chain_is_an_error() {
    let mut hrsg = Hrsg::new(500.0);
    assert!(hrsg.is_empty());
    assert_eq!(hrsg.calculate(&If97::new()), Err(HrsgError::EmptyChain));
}

#[test]
fn chain_passes_flue_gas_through_in_order() {
    let water = If97::new();
    let mut hrsg = single_drum_chain(500.0);
    hrsg.calculate(&water).expect("chain");

    let units = hrsg.exchangers();
    let mut hot_in = hrsg.inlet_temperature();
    let mut sum = 0.0;
    for unit in units {
        let r = unit.result().expect("result");
        assert_relative_eq!(r.hot_in_c, hot_in);
        assert!(r.hot_out_c < r.hot_in_c);
        hot_in = r.hot_out_c;
        sum += r.duty_kw;
    }
    assert_relative_eq!(hrsg.total_duty().expect("total"), sum, max_relative = 1e-12);
    assert_relative_eq!(hrsg.outlet_temperature().expect("outlet"), hot_in);
    assert_relative_eq!(
        hrsg.outlet_temperature().expect("outlet"),
        energy_balance_outlet(500.0, sum, GAS_FLOW, GAS_CP),
        max_relative = 1e-9
    );
}

#[test]
fn recalculation_is_idempotent() {
    let water = If97::new();
    let mut hrsg = single_drum_chain(500.0);
    hrsg.calculate(&water).expect("first");
    let first = hrsg.clone();
    hrsg.calculate(&water).expect("second");
    assert_eq!(hrsg, first);
}

#[test]
fn appending_invalidates_totals() {
    let water = If97::new();
    let mut hrsg = single_drum_chain(500.0);
    hrsg.calculate(&water).expect("chain");
    hrsg.add_exchanger(
        HeatExchanger::new(spec("Preheater", ExchangerKind::Economiser, 20.0, 60.0))
            .expect("preheater"),
    );
    assert_eq!(hrsg.len(), 4);
    assert!(hrsg.total_duty().is_err());
    hrsg.calculate(&water).expect("again");
    assert!(hrsg.total_duty().is_ok());
}

#[test]
fn pinch_diagram_walks_from_outlet() {
    let water = If97::new();
    let mut hrsg = single_drum_chain(500.0);
    hrsg.calculate(&water).expect("chain");
    let pinch = hrsg.pinch_diagram(30.0).expect("pinch");

    let names: Vec<&str> = pinch.segments.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Economiser", "Evaporator", "Superheater"]);
    assert_relative_eq!(pinch.segments[0].duty_start_kw, 0.0);
    for pair in pinch.segments.windows(2) {
        assert_relative_eq!(pair[0].duty_end_kw, pair[1].duty_start_kw);
    }
    assert_relative_eq!(
        pinch.total_duty(),
        hrsg.total_duty().expect("total"),
        max_relative = 1e-12
    );

    let min = pinch.pinch().expect("pinch point");
    for seg in &pinch.segments {
        assert!(min.min_approach_k() <= seg.min_approach_k());
        assert_eq!(seg.flagged, seg.min_approach_k() < 30.0);
    }
}

#[test]
fn log_mean_temperature_difference() {
    assert_eq!(log_mean(20.0, 20.0), Some(20.0));
    assert_eq!(log_mean(-1.0, 20.0), None);
    let lm = log_mean(100.0, 50.0).expect("lmtd");
    assert_relative_eq!(lm, 50.0 / 2f64.ln(), max_relative = 1e-12);
}
