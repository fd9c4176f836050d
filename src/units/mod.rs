//! 단위 정의 및 변환 모듈 모음.
//! 내부 계산은 bar(abs), °C, kJ/kg, kJ/kg·K, kg/s, kW 기준으로 고정한다.

pub mod pressure;
pub mod temperature;

pub use pressure::{bar_to_mpa, from_bar, PressureUnit};
pub use temperature::{from_celsius, to_celsius, to_kelvin, TemperatureUnit, KELVIN_OFFSET};
