//! IF97 기준점 회귀 테스트. IAPWS-IF97 공식 문서의 검증 예제 값을 활용한다.
use combined_cycle_toolbox::properties::if97::{
    saturation_pressure_bar_abs_from_temp_c, saturation_temp_c_from_pressure_bar_abs,
};
use combined_cycle_toolbox::properties::{If97, Phase, PropertyError, Region, WaterProperties};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn region1_reference_point() {
    // IF97: p = 3 MPa (30 bar abs), T = 300 K (26.85 °C)
    let st = If97::new().liquid(30.0, 26.85).expect("region1");
    assert_close("h", st.enthalpy, 115.331_273_021_438_4, 1e-6);
    assert_close("s", st.entropy, 0.392_294_792_402_624_27, 1e-6);
}

#[test]
fn region2_reference_points() {
    let water = If97::new();
    // IF97: p = 0.0035 MPa (0.035 bar abs), T = 300 K (26.85 °C)
    let low = water.vapor(0.035, 26.85).expect("region2 low T");
    assert_close("h300K", low.enthalpy, 2_549.911_450_840_020_3, 1e-6);
    assert_close("s300K", low.entropy, 8.522_389_667_335_792, 1e-6);

    // IF97: p = 0.0035 MPa (0.035 bar abs), T = 700 K (426.85 °C)
    let high = water.vapor(0.035, 426.85).expect("region2 high T");
    assert_close("h700K", high.enthalpy, 3_335.683_753_731_224, 1e-6);
    assert_close("s700K", high.entropy, 10.174_999_578_595_989, 1e-6);
}

#[test]
fn saturation_reference_points() {
    // 포화선 근사식 기준이므로 IF97 Region 4 값과 1e-4 이내로만 맞춘다.
    // T = 300 K → p = 0.00353658941 MPa
    let p = saturation_pressure_bar_abs_from_temp_c(26.85).expect("psat");
    assert_close("psat(300K)", p, 0.035_365_894_1, 1e-4);

    // IF97 Region 4: p = 1 MPa → T = 453.035632 K, p = 10 MPa → T = 584.149488 K
    let t1 = saturation_temp_c_from_pressure_bar_abs(10.0).expect("tsat 1MPa");
    assert_close("tsat(1MPa)", t1, 453.035_632 - 273.15, 1e-4);
    let t2 = saturation_temp_c_from_pressure_bar_abs(100.0).expect("tsat 10MPa");
    assert_close("tsat(10MPa)", t2, 584.149_488 - 273.15, 1e-4);
}

#[test]
fn saturated_mixture_lies_between_liquid_and_vapor() {
    let water = If97::new();
    let f = water.saturated(8.0, 0.0).expect("x=0");
    let g = water.saturated(8.0, 1.0).expect("x=1");
    let mid = water.saturated(8.0, 0.5).expect("x=0.5");
    assert!(f.entropy < mid.entropy && mid.entropy < g.entropy);
    assert_close("h mid", mid.enthalpy, 0.5 * (f.enthalpy + g.enthalpy), 1e-9);
}

#[test]
fn invalid_quality_and_pressure_are_rejected() {
    let water = If97::new();
    assert_eq!(
        water.saturated(8.0, 1.2),
        Err(PropertyError::InvalidQuality(1.2))
    );
    assert_eq!(
        water.liquid(0.0, 20.0),
        Err(PropertyError::NonPositivePressure(0.0))
    );
}

#[test]
fn temperature_from_entropy_round_trip() {
    let water = If97::new();
    for (p, t, region) in [
        (10.0, 100.0, Region::Liquid),
        (165.0, 145.0, Region::Liquid),
        (8.0, 400.0, Region::Vapor),
        (4.0, 250.0, Region::Vapor),
    ] {
        let s = match region {
            Region::Liquid => water.liquid(p, t),
            Region::Vapor => water.vapor(p, t),
        }
        .expect("forward")
        .entropy;
        let back = water
            .temperature_from_entropy(p, s, region)
            .expect("inverse");
        assert!((back - t).abs() < 1e-6, "p={p} t={t} back={back}");
    }
}

#[test]
fn entropy_outside_region_reports_bisection_failure() {
    let water = If97::new();
    // 포화증기보다 엔트로피가 큰 값은 액상 구간에 근이 없다.
    let s_g = water.saturated(8.0, 1.0).expect("sat vapor").entropy;
    let err = water
        .temperature_from_entropy(8.0, s_g + 1.0, Region::Liquid)
        .expect_err("no root");
    assert!(matches!(err, PropertyError::Bisection(_)), "{err:?}");
}

#[test]
fn isentropic_point_classifies_phase() {
    let water = If97::new();
    let t_sat = water.saturation_temperature(8.0).expect("tsat");

    // 165 bar / 565 °C 증기를 8 bar까지 팽창하면 습증기
    let s_hp = water.vapor(165.0, 565.0).expect("hp steam").entropy;
    let (t, phase) = water.isentropic_point(8.0, s_hp).expect("wet");
    assert_close("t wet", t, t_sat, 1e-12);
    match phase {
        Phase::Saturated { quality } => assert!(quality > 0.8 && quality < 1.0, "x={quality}"),
        other => panic!("expected two-phase, got {other:?}"),
    }

    let s_hot = water.vapor(8.0, 300.0).expect("vapor").entropy;
    let (t, phase) = water.isentropic_point(8.0, s_hot).expect("vapor");
    assert_eq!(phase, Phase::Vapor);
    assert!((t - 300.0).abs() < 1e-6);

    let s_cold = water.liquid(8.0, 50.0).expect("liquid").entropy;
    let (t, phase) = water.isentropic_point(8.0, s_cold).expect("liquid");
    assert_eq!(phase, Phase::Liquid);
    assert!((t - 50.0).abs() < 1e-6);
}

#[test]
fn saturation_line_matches_saturated_mixture_lookup() {
    // 근사 포화온도에서 구한 포화액/포화증기 물성은 IF97 포화 혼합물 값과 거의 같아야 한다.
    let water = If97::new();
    for p in [0.05, 4.0, 8.0, 40.0] {
        let t_sat = water.saturation_temperature(p).expect("tsat");
        let f = water.saturated(p, 0.0).expect("x=0");
        let g = water.saturated(p, 1.0).expect("x=1");
        let liquid = water.liquid(p, t_sat).expect("liquid at tsat");
        let vapor = water.vapor(p, t_sat).expect("vapor at tsat");
        assert_close("h_f", liquid.enthalpy, f.enthalpy, 1e-3);
        assert_close("s_f", liquid.entropy, f.entropy, 1e-3);
        assert_close("h_g", vapor.enthalpy, g.enthalpy, 1e-3);
        assert_close("s_g", vapor.entropy, g.entropy, 1e-3);
    }
}
