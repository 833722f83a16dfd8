//! 사용자 입력 검증과 결과 표시 형식.

use thiserror::Error;

/// 결과 표시 기본 소수 자릿수.
pub const DEFAULT_PRECISION: usize = 4;

/// 허용하는 최대 소수 자릿수. f64 유효숫자 범위를 넘는 자릿수는 의미가 없다.
pub const MAX_PRECISION: usize = 15;

/// 입력값 검증 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid number")]
    NotANumber(String),
    #[error("value must be finite: {0}")]
    NonFinite(String),
}

/// 입력 문자열을 값으로 해석한다.
///
/// 아직 입력 중인 상태(`""`, `"-"`, `"."`)는 오류가 아니라 `Ok(None)`이다.
/// `inf`, `NaN`처럼 파싱은 되지만 유한하지 않은 값은 거절한다.
pub fn parse_value(raw: &str) -> Result<Option<f64>, InputError> {
    let s = raw.trim();
    if matches!(s, "" | "-" | ".") {
        return Ok(None);
    }
    let value: f64 = s
        .parse()
        .map_err(|_| InputError::NotANumber(s.to_string()))?;
    check_finite(value)?;
    Ok(Some(value))
}

/// 외부에서 이미 숫자로 받은 값을 검사한다.
pub fn check_finite(value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NonFinite(value.to_string()))
    }
}

/// 결과를 고정 소수 자릿수로 표시한다. 자릿수는 `MAX_PRECISION`에서 잘린다.
pub fn format_value(value: f64, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    format!("{value:.precision$}")
}

/// 결과를 "값 단위" 형태로 표시한다.
pub fn format_result(value: f64, unit: &str, precision: usize) -> String {
    format!("{} {unit}", format_value(value, precision))
}
