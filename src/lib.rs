//! 복합발전(가스터빈 + 3압 재열 랭킨 + HRSG) 플랜트 해석 라이브러리.
//!
//! 계산은 모두 라이브러리에 두고 바이너리는 설정 로드와 결과 출력만 맡는다.

pub mod app;
pub mod config;
pub mod cycle;
pub mod export;
pub mod hrsg;
pub mod plant;
pub mod plot;
pub mod properties;
pub mod solver;
pub mod units;
