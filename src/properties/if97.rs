//! IAPWS-IF97 계산을 seuif97 크레이트로 위임한 래퍼.
//! 입력: 압력(bar, 절대), 온도(°C)
//! 출력: 비엔탈피(kJ/kg), 비엔트로피(kJ/kg·K)

use seuif97::{pt, px, OH, OS};

use super::{PropertyError, SpecificState, WaterProperties};
use crate::solver::BisectionConfig;
use crate::units::{bar_to_mpa, to_celsius, to_kelvin};

// ---------------- Region 4 (포화) ----------------
const P4_STAR_MPA: f64 = 22.064;
const T4_STAR_K: f64 = 647.096;
const R4_N: [f64; 6] = [
    -7.859_517_83,
    1.844_082_59,
    -11.786_649_7,
    22.680_741_1,
    -15.961_871_9,
    1.801_225_02,
];
const SAT_NEWTON_MAX_ITERS: usize = 50;

/// seuif97 기반 물성 서비스.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct If97 {
    /// 엔트로피 역계산 설정
    pub inverse: BisectionConfig,
}

impl If97 {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_pressure(p_bar_abs: f64) -> Result<(), PropertyError> {
    if p_bar_abs > 0.0 {
        Ok(())
    } else {
        Err(PropertyError::NonPositivePressure(p_bar_abs))
    }
}

fn out_of_range(what: &'static str, pressure_bar: f64, value: f64) -> PropertyError {
    PropertyError::OutOfRange {
        what,
        pressure_bar,
        value,
    }
}

/// 영역을 강제해 h/s를 계산한다. 입력은 bar(abs)/°C.
fn region_props(p_bar_abs: f64, t_c: f64, region: i32) -> Result<SpecificState, PropertyError> {
    check_pressure(p_bar_abs)?;
    let p_mpa = bar_to_mpa(p_bar_abs);
    let h = pt(p_mpa, t_c, (OH, region));
    let s = pt(p_mpa, t_c, (OS, region));
    if h.is_nan() || s.is_nan() {
        let what = if region == 1 { "Region 1" } else { "Region 2" };
        return Err(out_of_range(what, p_bar_abs, t_c));
    }
    Ok(SpecificState {
        enthalpy: h,
        entropy: s,
    })
}

/// Region 4 포화선의 ln(p/p*) 전개식. θ = 1 - T/T*.
fn saturation_series(t_k: f64) -> f64 {
    let theta = 1.0 - t_k / T4_STAR_K;
    (T4_STAR_K / t_k)
        * (R4_N[0] * theta
            + R4_N[1] * theta.powf(1.5)
            + R4_N[2] * theta.powi(3)
            + R4_N[3] * theta.powf(3.5)
            + R4_N[4] * theta.powi(4)
            + R4_N[5] * theta.powf(7.5))
}

/// 포화압력(bar abs) - 입력 온도는 °C.
pub fn saturation_pressure_bar_abs_from_temp_c(t_c: f64) -> Result<f64, PropertyError> {
    let t_k = to_kelvin(t_c);
    if t_k <= 0.0 || t_k > T4_STAR_K {
        return Err(PropertyError::TemperatureOutOfRange {
            what: "Region 4 포화압력 (0~374°C)",
            t_c,
        });
    }
    let p_mpa = P4_STAR_MPA * saturation_series(t_k).exp();
    Ok(p_mpa * 10.0)
}

/// 포화온도(°C) - 입력 압력은 bar abs. 뉴턴법이 수렴하지 않으면 오류를 돌려준다.
///
/// 포화선은 위 근사식을 쓰고, 포화 혼합물 h/s(`saturated`)는 seuif97의 IF97
/// Region 4 식을 쓴다. 두 포화선은 상대 1e-5 정도 차이가 나고(임계압 근처에서는
/// 더 커진다), 같은 드럼 상태점의 온도와 h/s도 그만큼 어긋날 수 있다.
pub fn saturation_temp_c_from_pressure_bar_abs(p_bar_abs: f64) -> Result<f64, PropertyError> {
    check_pressure(p_bar_abs)?;
    if bar_to_mpa(p_bar_abs) > P4_STAR_MPA {
        return Err(out_of_range("Region 4 포화온도 (임계압 초과)", p_bar_abs, p_bar_abs));
    }
    let ln_ratio = (bar_to_mpa(p_bar_abs) / P4_STAR_MPA).ln();
    let mut t_k = 373.15_f64;
    for _ in 0..SAT_NEWTON_MAX_ITERS {
        let theta = 1.0 - t_k / T4_STAR_K;
        let series = saturation_series(t_k);
        let f = series - ln_ratio;
        let dtheta_dt = -1.0 / T4_STAR_K;
        let dfdtheta = R4_N[0]
            + 1.5 * R4_N[1] * theta.powf(0.5)
            + 3.0 * R4_N[2] * theta.powi(2)
            + 3.5 * R4_N[3] * theta.powf(2.5)
            + 4.0 * R4_N[4] * theta.powi(3)
            + 7.5 * R4_N[5] * theta.powf(6.5);
        let dfd_t = -series / t_k + (T4_STAR_K / t_k) * dfdtheta * dtheta_dt;
        let delta = f / dfd_t;
        // 임계점 근처에서 θ가 음수가 되지 않도록 제한
        t_k = (t_k - delta).min(T4_STAR_K);
        if !t_k.is_finite() {
            break;
        }
        if delta.abs() < 1e-8 {
            return Ok(to_celsius(t_k));
        }
    }
    Err(PropertyError::SaturationNotConverged(p_bar_abs))
}

impl WaterProperties for If97 {
    fn liquid(&self, p_bar: f64, t_c: f64) -> Result<SpecificState, PropertyError> {
        region_props(p_bar, t_c, 1)
    }

    fn vapor(&self, p_bar: f64, t_c: f64) -> Result<SpecificState, PropertyError> {
        region_props(p_bar, t_c, 2)
    }

    fn saturated(&self, p_bar: f64, quality: f64) -> Result<SpecificState, PropertyError> {
        check_pressure(p_bar)?;
        if !(0.0..=1.0).contains(&quality) {
            return Err(PropertyError::InvalidQuality(quality));
        }
        let p_mpa = bar_to_mpa(p_bar);
        let h = px(p_mpa, quality, OH);
        let s = px(p_mpa, quality, OS);
        if h.is_nan() || s.is_nan() {
            return Err(out_of_range("Region 4", p_bar, quality));
        }
        Ok(SpecificState {
            enthalpy: h,
            entropy: s,
        })
    }

    fn saturation_temperature(&self, p_bar: f64) -> Result<f64, PropertyError> {
        saturation_temp_c_from_pressure_bar_abs(p_bar)
    }

    fn saturation_pressure(&self, t_c: f64) -> Result<f64, PropertyError> {
        saturation_pressure_bar_abs_from_temp_c(t_c)
    }

    fn inverse_config(&self) -> BisectionConfig {
        self.inverse
    }
}
