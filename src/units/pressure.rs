use serde::{Deserialize, Serialize};

const PA_PER_BAR: f64 = 100_000.0;

/// 압력 단위. 내부 기준은 항상 bar(abs)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Bar,
    Pascal,
    KiloPascal,
    MegaPascal,
}

impl PressureUnit {
    /// CSV 헤더 등에 쓰는 단위 표기.
    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Bar => "bar",
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
        }
    }
}

/// bar(abs) 값을 원하는 단위로 변환한다.
pub fn from_bar(value_bar: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value_bar,
        PressureUnit::Pascal => value_bar * PA_PER_BAR,
        PressureUnit::KiloPascal => value_bar * 100.0,
        PressureUnit::MegaPascal => value_bar / 10.0,
    }
}

/// IF97 계산용 MPa 변환.
pub fn bar_to_mpa(p_bar: f64) -> f64 {
    from_bar(p_bar, PressureUnit::MegaPascal)
}
