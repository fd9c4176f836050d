use tracing::debug;

use super::{log_mean, HrsgError};
use crate::properties::WaterProperties;

/// 열교환기 종류. 저온측 엔탈피 조회 영역을 결정한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExchangerKind {
    /// 절탄기: 압축수 영역
    Economiser,
    /// 증발기: 포화 영역, 입출구 건도 지정
    Evaporator { quality_in: f64, quality_out: f64 },
    /// 과열기: 과열 증기 영역
    Superheater,
}

impl ExchangerKind {
    /// 포화수에서 포화증기까지 증발시키는 증발기.
    pub fn evaporator() -> Self {
        ExchangerKind::Evaporator {
            quality_in: 0.0,
            quality_out: 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExchangerKind::Economiser => "economiser",
            ExchangerKind::Evaporator { .. } => "evaporator",
            ExchangerKind::Superheater => "superheater",
        }
    }
}

/// 열교환기 생성 입력.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangerSpec {
    pub name: String,
    pub kind: ExchangerKind,
    /// 저온측 운전 압력(bar abs)
    pub pressure_bar: f64,
    /// 저온측(물/증기) 입구 온도(°C)
    pub cold_in_c: f64,
    /// 저온측 출구 온도(°C)
    pub cold_out_c: f64,
    /// 저온측 유량(kg/s)
    pub cold_mass_flow: f64,
    /// 고온측(배가스) 유량(kg/s)
    pub hot_mass_flow: f64,
    /// 고온측 정압비열(kJ/kg·K)
    pub hot_cp: f64,
    /// 단독 사용 시 고온측 입구 온도(°C). 체인에서는 비워 둔다.
    pub hot_in_c: Option<f64>,
}

/// 열교환기 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangerDuty {
    /// 저온측 입구 비엔탈피(kJ/kg)
    pub cold_in_enthalpy: f64,
    /// 저온측 출구 비엔탈피(kJ/kg)
    pub cold_out_enthalpy: f64,
    /// 고온측 입구 온도(°C)
    pub hot_in_c: f64,
    /// 고온측 출구 온도(°C)
    pub hot_out_c: f64,
    /// 열량(kW)
    pub duty_kw: f64,
    /// 로그 평균 온도차(K). 온도 교차 시 `None`
    pub lmtd_k: Option<f64>,
}

/// 대향류 열교환기 한 대.
///
/// 고온측 입구 온도가 주어진 뒤 [`HeatExchanger::calculate`]를 호출해야
/// 출구 온도와 열량을 조회할 수 있다.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatExchanger {
    spec: ExchangerSpec,
    hot_in_c: Option<f64>,
    result: Option<ExchangerDuty>,
}

impl HeatExchanger {
    /// 입력을 검증해 열교환기를 만든다.
    pub fn new(spec: ExchangerSpec) -> Result<Self, HrsgError> {
        let invalid = |reason: String| HrsgError::InvalidExchanger {
            name: spec.name.clone(),
            reason,
        };
        for (what, value) in [
            ("운전 압력", spec.pressure_bar),
            ("저온측 유량", spec.cold_mass_flow),
            ("고온측 유량", spec.hot_mass_flow),
            ("고온측 비열", spec.hot_cp),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{what} 값은 양수여야 합니다: {value}")));
            }
        }
        if !(spec.cold_in_c.is_finite() && spec.cold_out_c.is_finite()) {
            return Err(invalid("저온측 온도가 유한하지 않습니다".into()));
        }
        // 저온측은 가열만 된다.
        match spec.kind {
            ExchangerKind::Evaporator {
                quality_in,
                quality_out,
            } => {
                for x in [quality_in, quality_out] {
                    if !(0.0..=1.0).contains(&x) {
                        return Err(invalid(format!("건도는 0~1 사이여야 합니다: {x}")));
                    }
                }
                if quality_out < quality_in {
                    return Err(invalid(format!(
                        "출구 건도 {quality_out}가 입구 건도 {quality_in}보다 작습니다"
                    )));
                }
            }
            ExchangerKind::Economiser | ExchangerKind::Superheater => {
                if spec.cold_out_c < spec.cold_in_c {
                    return Err(invalid(format!(
                        "저온측 출구 {} °C가 입구 {} °C보다 낮습니다",
                        spec.cold_out_c, spec.cold_in_c
                    )));
                }
            }
        }

        let mut unit = Self {
            hot_in_c: None,
            result: None,
            spec,
        };
        if let Some(t) = unit.spec.hot_in_c {
            unit.set_hot_inlet(t)?;
        }
        Ok(unit)
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn kind(&self) -> ExchangerKind {
        self.spec.kind
    }

    pub fn spec(&self) -> &ExchangerSpec {
        &self.spec
    }

    pub fn hot_inlet(&self) -> Option<f64> {
        self.hot_in_c
    }

    /// 고온측 입구 온도를 주입한다. 저온측 입구보다 차가우면 오류.
    /// 값이 바뀌면 이전 계산 결과는 무효가 된다.
    pub fn set_hot_inlet(&mut self, hot_in_c: f64) -> Result<(), HrsgError> {
        if !hot_in_c.is_finite() || hot_in_c < self.spec.cold_in_c {
            return Err(HrsgError::HotSideTooCold {
                name: self.spec.name.clone(),
                hot_in_c,
                cold_in_c: self.spec.cold_in_c,
            });
        }
        if self.hot_in_c != Some(hot_in_c) {
            self.hot_in_c = Some(hot_in_c);
            self.result = None;
        }
        Ok(())
    }

    /// 저온측 엔탈피를 조회하고 에너지 수지로 고온측 출구 온도와 열량을 구한다.
    pub fn calculate<W: WaterProperties + ?Sized>(
        &mut self,
        props: &W,
    ) -> Result<&ExchangerDuty, HrsgError> {
        let hot_in_c = self
            .hot_in_c
            .ok_or_else(|| HrsgError::HotInletNotSet(self.spec.name.clone()))?;
        let spec = &self.spec;
        let p = spec.pressure_bar;

        let (h_in, h_out) = match spec.kind {
            ExchangerKind::Economiser => (
                props.liquid(p, spec.cold_in_c)?.enthalpy,
                props.liquid(p, spec.cold_out_c)?.enthalpy,
            ),
            ExchangerKind::Superheater => (
                props.vapor(p, spec.cold_in_c)?.enthalpy,
                props.vapor(p, spec.cold_out_c)?.enthalpy,
            ),
            ExchangerKind::Evaporator {
                quality_in,
                quality_out,
            } => (
                props.saturated(p, quality_in)?.enthalpy,
                props.saturated(p, quality_out)?.enthalpy,
            ),
        };

        let duty_kw = spec.cold_mass_flow * (h_out - h_in);
        let hot_out_c = hot_in_c
            - (spec.cold_mass_flow / (spec.hot_mass_flow * spec.hot_cp)) * (h_out - h_in);
        let lmtd_k = log_mean(hot_in_c - spec.cold_out_c, hot_out_c - spec.cold_in_c);
        debug!(
            exchanger = spec.name.as_str(),
            kind = spec.kind.label(),
            hot_in_c,
            hot_out_c,
            duty_kw,
            "열교환기 계산"
        );

        Ok(self.result.insert(ExchangerDuty {
            cold_in_enthalpy: h_in,
            cold_out_enthalpy: h_out,
            hot_in_c,
            hot_out_c,
            duty_kw,
            lmtd_k,
        }))
    }

    /// 계산 결과. `calculate` 이전에는 오류.
    pub fn result(&self) -> Result<&ExchangerDuty, HrsgError> {
        self.result
            .as_ref()
            .ok_or_else(|| HrsgError::NotCalculated(self.spec.name.clone()))
    }

    /// 고온측 출구 온도(°C).
    pub fn hot_outlet(&self) -> Result<f64, HrsgError> {
        Ok(self.result()?.hot_out_c)
    }

    /// 열량(kW).
    pub fn duty(&self) -> Result<f64, HrsgError> {
        Ok(self.result()?.duty_kw)
    }
}
