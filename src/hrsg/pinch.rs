//! 핀치 해석(복합 곡선).
//!
//! HRSG 출구에서 입구 방향으로(등록 역순) 열교환기를 따라가며 누적 열량에 대한
//! 배가스/증기 온도 구간을 만든다. 각 열교환기 양 끝의 접근 온도차가 기준보다
//! 작으면 표시한다.

use tracing::warn;

use super::{Hrsg, HrsgError};

/// 열교환기 하나의 복합 곡선 구간.
#[derive(Debug, Clone, PartialEq)]
pub struct PinchSegment {
    pub name: String,
    /// 구간 시작 누적 열량(kW)
    pub duty_start_kw: f64,
    /// 구간 끝 누적 열량(kW)
    pub duty_end_kw: f64,
    /// 배가스 온도: 시작점은 출구, 끝점은 입구(°C)
    pub hot_start_c: f64,
    pub hot_end_c: f64,
    /// 증기측 온도: 시작점은 입구, 끝점은 출구(°C)
    pub cold_start_c: f64,
    pub cold_end_c: f64,
    /// 배가스 출구 - 증기 입구 (K)
    pub cold_end_approach_k: f64,
    /// 배가스 입구 - 증기 출구 (K)
    pub hot_end_approach_k: f64,
    /// 기준 미달 여부
    pub flagged: bool,
}

impl PinchSegment {
    /// 두 끝 중 작은 접근 온도차(K).
    pub fn min_approach_k(&self) -> f64 {
        self.cold_end_approach_k.min(self.hot_end_approach_k)
    }
}

/// 핀치 다이어그램.
#[derive(Debug, Clone, PartialEq)]
pub struct PinchDiagram {
    /// HRSG 출구 쪽 열교환기부터의 구간
    pub segments: Vec<PinchSegment>,
    /// 표시 기준 접근 온도차(K)
    pub threshold_k: f64,
}

impl PinchDiagram {
    /// 접근 온도차가 가장 작은 구간(핀치점).
    pub fn pinch(&self) -> Option<&PinchSegment> {
        self.segments
            .iter()
            .min_by(|a, b| a.min_approach_k().total_cmp(&b.min_approach_k()))
    }

    /// 기준 미달로 표시된 구간.
    pub fn flagged(&self) -> impl Iterator<Item = &PinchSegment> {
        self.segments.iter().filter(|s| s.flagged)
    }

    /// 누적 열량 끝값(kW).
    pub fn total_duty(&self) -> f64 {
        self.segments.last().map_or(0.0, |s| s.duty_end_kw)
    }
}

impl Hrsg {
    /// 계산된 체인으로 핀치 다이어그램을 만든다. 빈 체인이거나 계산 전이면 오류.
    pub fn pinch_diagram(&self, threshold_k: f64) -> Result<PinchDiagram, HrsgError> {
        self.total_duty()?;
        let mut segments = Vec::with_capacity(self.len());
        let mut cumulative = 0.0;
        for unit in self.exchangers().iter().rev() {
            let result = unit.result()?;
            let spec = unit.spec();
            let duty_start_kw = cumulative;
            cumulative += result.duty_kw;

            let cold_end_approach_k = result.hot_out_c - spec.cold_in_c;
            let hot_end_approach_k = result.hot_in_c - spec.cold_out_c;
            let flagged = cold_end_approach_k.min(hot_end_approach_k) < threshold_k;
            if flagged {
                warn!(
                    exchanger = unit.name(),
                    cold_end_approach_k,
                    hot_end_approach_k,
                    threshold_k,
                    "접근 온도차 기준 미달"
                );
            }

            segments.push(PinchSegment {
                name: unit.name().to_string(),
                duty_start_kw,
                duty_end_kw: cumulative,
                hot_start_c: result.hot_out_c,
                hot_end_c: result.hot_in_c,
                cold_start_c: spec.cold_in_c,
                cold_end_c: spec.cold_out_c,
                cold_end_approach_k,
                hot_end_approach_k,
                flagged,
            });
        }
        Ok(PinchDiagram {
            segments,
            threshold_k,
        })
    }
}
