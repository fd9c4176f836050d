//! 선도 데이터(T-s, h-s, 복합 곡선).
//!
//! 그리기는 하지 않고, 외부 도구가 바로 쓸 수 있는 점 목록만 만든다.

use crate::cycle::StatePoint;
use crate::hrsg::PinchDiagram;

/// 사이클 선도 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    /// 세로축 온도(°C)
    TemperatureEntropy,
    /// 세로축 엔탈피(kJ/kg)
    EnthalpyEntropy,
}

/// 상태점 하나의 선도 좌표. x는 항상 엔트로피(kJ/kg·K).
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// 상태점 배열을 선도 좌표로 바꾼다. 라벨과 상태점 개수가 다르면 짧은 쪽에 맞춘다.
pub fn cycle_diagram(labels: &[&str], states: &[StatePoint], kind: DiagramKind) -> Vec<PlotPoint> {
    labels
        .iter()
        .zip(states)
        .map(|(label, st)| PlotPoint {
            label: (*label).to_string(),
            x: st.entropy,
            y: match kind {
                DiagramKind::TemperatureEntropy => st.temperature_c,
                DiagramKind::EnthalpyEntropy => st.enthalpy,
            },
        })
        .collect()
}

/// 핀치 다이어그램의 복합 곡선. 점은 (누적 열량 kW, 온도 °C).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositeCurves {
    /// 배가스 곡선. HRSG 출구에서 입구까지 이어진 한 줄.
    pub hot: Vec<(f64, f64)>,
    /// 증기측 곡선. 열교환기마다 끊어진 선분.
    pub cold: Vec<[(f64, f64); 2]>,
}

/// 핀치 다이어그램을 복합 곡선 좌표로 바꾼다.
pub fn composite_curves(diagram: &PinchDiagram) -> CompositeCurves {
    let mut curves = CompositeCurves::default();
    if let Some(first) = diagram.segments.first() {
        curves.hot.push((first.duty_start_kw, first.hot_start_c));
    }
    for seg in &diagram.segments {
        curves.hot.push((seg.duty_end_kw, seg.hot_end_c));
        curves.cold.push([
            (seg.duty_start_kw, seg.cold_start_c),
            (seg.duty_end_kw, seg.cold_end_c),
        ]);
    }
    curves
}
