//! 물성 역계산 등에 쓰는 수치 해법 모음.

pub mod bisection;

pub use bisection::{find_root, BisectionConfig, BisectionError, Root};
