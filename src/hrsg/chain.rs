use tracing::debug;

use super::{HeatExchanger, HrsgError};
use crate::properties::WaterProperties;

#[derive(Debug, Clone, Copy, PartialEq)]
struct ChainTotals {
    outlet_temp_c: f64,
    total_duty_kw: f64,
}

/// 순서가 있는 열교환기 체인.
///
/// 열교환기는 추가만 가능하며, 계산은 항상 등록 순서대로 진행한다.
#[derive(Debug, Clone, PartialEq)]
pub struct Hrsg {
    inlet_temp_c: f64,
    exchangers: Vec<HeatExchanger>,
    totals: Option<ChainTotals>,
}

impl Hrsg {
    /// 배가스 입구 온도(°C)로 빈 체인을 만든다.
    pub fn new(inlet_temp_c: f64) -> Self {
        Self {
            inlet_temp_c,
            exchangers: Vec::new(),
            totals: None,
        }
    }

    /// 체인 끝에 열교환기를 붙인다. 기존 합계는 무효가 된다.
    pub fn add_exchanger(&mut self, unit: HeatExchanger) {
        self.exchangers.push(unit);
        self.totals = None;
    }

    pub fn inlet_temperature(&self) -> f64 {
        self.inlet_temp_c
    }

    pub fn exchangers(&self) -> &[HeatExchanger] {
        &self.exchangers
    }

    pub fn len(&self) -> usize {
        self.exchangers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchangers.is_empty()
    }

    /// 체인을 한 번 순회한다. 첫 열교환기에는 배가스 입구 온도를, 이후에는
    /// 직전 열교환기의 고온측 출구 온도를 주입한다. 중간에 실패하면 합계는
    /// 계산되지 않은 상태로 남는다.
    pub fn calculate<W: WaterProperties + ?Sized>(&mut self, props: &W) -> Result<(), HrsgError> {
        self.totals = None;
        if self.exchangers.is_empty() {
            return Err(HrsgError::EmptyChain);
        }

        let mut hot_in_c = self.inlet_temp_c;
        let mut total_duty_kw = 0.0;
        for unit in &mut self.exchangers {
            unit.set_hot_inlet(hot_in_c)?;
            let result = unit.calculate(props)?;
            total_duty_kw += result.duty_kw;
            hot_in_c = result.hot_out_c;
        }

        debug!(
            outlet_c = hot_in_c,
            total_duty_kw,
            units = self.exchangers.len(),
            "HRSG 체인 계산 완료"
        );
        self.totals = Some(ChainTotals {
            outlet_temp_c: hot_in_c,
            total_duty_kw,
        });
        Ok(())
    }

    fn totals(&self) -> Result<&ChainTotals, HrsgError> {
        self.totals
            .as_ref()
            .ok_or_else(|| HrsgError::NotCalculated("HRSG".into()))
    }

    /// 배가스 최종 출구 온도(°C) = 마지막 열교환기의 고온측 출구.
    pub fn outlet_temperature(&self) -> Result<f64, HrsgError> {
        Ok(self.totals()?.outlet_temp_c)
    }

    /// 전체 열량(kW) = 각 열교환기 열량의 합.
    pub fn total_duty(&self) -> Result<f64, HrsgError> {
        Ok(self.totals()?.total_duty_kw)
    }
}
