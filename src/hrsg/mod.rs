//! 배열회수보일러(HRSG) 열교환기 체인.
//! 배가스는 등록 순서대로 각 열교환기를 지나며 식고, 앞 열교환기의 고온측
//! 출구 온도가 다음 열교환기의 고온측 입구 온도가 된다.

pub mod chain;
pub mod exchanger;
pub mod pinch;

pub use chain::Hrsg;
pub use exchanger::{ExchangerDuty, ExchangerKind, ExchangerSpec, HeatExchanger};
pub use pinch::{PinchDiagram, PinchSegment};

use thiserror::Error;

use crate::properties::PropertyError;

/// HRSG 계산 오류.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HrsgError {
    #[error("잘못된 열교환기 입력 ({name}): {reason}")]
    InvalidExchanger { name: String, reason: String },

    #[error("가열 유체가 피가열 유체보다 차갑습니다 ({name}): 고온측 입구 {hot_in_c:.2} °C < 저온측 입구 {cold_in_c:.2} °C")]
    HotSideTooCold {
        name: String,
        hot_in_c: f64,
        cold_in_c: f64,
    },

    #[error("고온측 입구 온도가 설정되지 않았습니다: {0}")]
    HotInletNotSet(String),

    #[error("아직 계산되지 않았습니다: {0}")]
    NotCalculated(String),

    #[error("열교환기가 없는 HRSG 체인입니다")]
    EmptyChain,

    #[error(transparent)]
    Property(#[from] PropertyError),
}

/// 대향류 로그 평균 온도차. 온도 교차(ΔT ≤ 0)면 `None`.
pub fn log_mean(delta1: f64, delta2: f64) -> Option<f64> {
    if delta1 <= 0.0 || delta2 <= 0.0 {
        return None;
    }
    if (delta1 - delta2).abs() < 1e-9 {
        return Some(delta1);
    }
    let lm = (delta1 / delta2).ln();
    Some((delta1 - delta2) / lm)
}

/// 전체 흡열량만으로 추정한 배가스 출구 온도(°C).
/// 체인 계산 결과와 비교하는 열수지 점검용이다.
pub fn energy_balance_outlet(inlet_c: f64, heat_kw: f64, gas_mass_flow: f64, gas_cp: f64) -> f64 {
    inlet_c - heat_kw / (gas_mass_flow * gas_cp)
}
