use serde::{Deserialize, Serialize};

/// 섭씨와 켈빈의 차이.
pub const KELVIN_OFFSET: f64 = 273.15;

/// 온도 단위를 정의한다. 내부 계산 기준은 항상 °C이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
}

impl TemperatureUnit {
    /// CSV 헤더 등에 쓰는 단위 표기.
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Kelvin => "K",
        }
    }
}

/// °C 값을 켈빈으로 변환한다.
pub fn to_kelvin(t_c: f64) -> f64 {
    t_c + KELVIN_OFFSET
}

/// 켈빈 값을 °C로 변환한다.
pub fn to_celsius(t_k: f64) -> f64 {
    t_k - KELVIN_OFFSET
}

/// 내부 기준(°C) 온도를 원하는 단위로 변환한다.
pub fn from_celsius(t_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => t_c,
        TemperatureUnit::Kelvin => to_kelvin(t_c),
    }
}
