//! 구간 이분법 근 찾기.
//!
//! 부호가 바뀌는 구간을 반씩 줄여 근을 찾는다. 반복 한도를 넘기면
//! [`BisectionError::MaxIters`]를 돌려준다.

use thiserror::Error;

/// 이분법 허용 오차와 반복 한도.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionConfig {
    pub max_iters: usize,
    /// 구간 폭 절대 허용 오차
    pub x_abs_tol: f64,
    /// 잔차 허용 오차
    pub residual_tol: f64,
}

impl Default for BisectionConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            x_abs_tol: 1e-9,
            residual_tol: 1e-10,
        }
    }
}

/// 이분법 실패 원인.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BisectionError {
    #[error("구간 경계가 유한하지 않음: [{left}, {right}]")]
    NonFiniteBracket { left: f64, right: f64 },

    #[error("구간 내 부호 변화 없음: f({left})={left_residual}, f({right})={right_residual}")]
    NoSignChange {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },

    #[error("x = {x}에서 잔차가 유한하지 않음: {residual}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("{iters}회 반복 후 수렴 실패 (구간 폭 {width})")]
    MaxIters { iters: usize, width: f64 },
}

/// 수렴한 근과 사용한 반복 횟수.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    pub x: f64,
    pub residual: f64,
    pub iters: usize,
}

/// `bracket` 안에서 `f(x) = 0`의 근을 찾는다.
///
/// `f`가 돌려주는 오류는 그대로 전파한다. 이분법 자체의 실패는
/// `E: From<BisectionError>`로 변환되어 호출자 오류 타입에 합류한다.
pub fn find_root<F, E>(mut f: F, bracket: [f64; 2], config: &BisectionConfig) -> Result<Root, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<BisectionError>,
{
    let [a, b] = bracket;
    if !a.is_finite() || !b.is_finite() {
        return Err(BisectionError::NonFiniteBracket { left: a, right: b }.into());
    }
    let (mut left, mut right) = if a <= b { (a, b) } else { (b, a) };

    let mut left_residual = checked(left, f(left)?)?;
    if left_residual.abs() <= config.residual_tol {
        return Ok(Root {
            x: left,
            residual: left_residual,
            iters: 0,
        });
    }
    let right_residual = checked(right, f(right)?)?;
    if right_residual.abs() <= config.residual_tol {
        return Ok(Root {
            x: right,
            residual: right_residual,
            iters: 0,
        });
    }
    if left_residual.signum() == right_residual.signum() {
        return Err(BisectionError::NoSignChange {
            left,
            right,
            left_residual,
            right_residual,
        }
        .into());
    }

    for iter in 1..=config.max_iters {
        let mid = 0.5 * (left + right);
        let mid_residual = checked(mid, f(mid)?)?;

        if mid_residual.abs() <= config.residual_tol || (right - left) <= config.x_abs_tol {
            return Ok(Root {
                x: mid,
                residual: mid_residual,
                iters: iter,
            });
        }

        if left_residual.signum() == mid_residual.signum() {
            left = mid;
            left_residual = mid_residual;
        } else {
            right = mid;
        }
    }

    Err(BisectionError::MaxIters {
        iters: config.max_iters,
        width: right - left,
    }
    .into())
}

fn checked(x: f64, residual: f64) -> Result<f64, BisectionError> {
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(BisectionError::NonFiniteResidual { x, residual })
    }
}
