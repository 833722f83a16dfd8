//! `{category, value, from, to}` 요청을 받아 `{value}` 또는 `{error}`로 답하는 경계 계층.
//!
//! 숫자 검증(비유한 값 거절)은 여기서 하고, 변환 엔진에는 유한한 값만 넘긴다.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::conversion;
use crate::input;

/// 변환 요청.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: String,
    pub value: f64,
    pub from: String,
    pub to: String,
}

/// 외부에 노출하는 오류 코드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    UnknownUnit,
    UnknownCategory,
    InvalidValue,
    InvalidRequest,
}

/// 변환 응답. 값 또는 오류 중 하나만 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConversionResponse {
    Value { value: f64 },
    Error { error: ErrorCode },
}

impl From<&conversion::ConversionError> for ErrorCode {
    fn from(err: &conversion::ConversionError) -> Self {
        match err {
            conversion::ConversionError::UnknownCategory(_) => ErrorCode::UnknownCategory,
            conversion::ConversionError::UnknownUnit { .. } => ErrorCode::UnknownUnit,
            // 변환 경로에서는 나오지 않는다
            conversion::ConversionError::NotLinear(_) => ErrorCode::InvalidRequest,
        }
    }
}

/// 요청 하나를 처리한다.
pub fn handle(request: &ConversionRequest) -> ConversionResponse {
    if let Err(err) = input::check_finite(request.value) {
        warn!(%err, "rejected request");
        return ConversionResponse::Error {
            error: ErrorCode::InvalidValue,
        };
    }
    match conversion::convert_named(&request.category, request.value, &request.from, &request.to)
    {
        Ok(value) => ConversionResponse::Value { value },
        Err(err) => {
            warn!(%err, "rejected request");
            ConversionResponse::Error {
                error: ErrorCode::from(&err),
            }
        }
    }
}

/// JSON 한 줄을 요청으로 읽어 JSON 한 줄 응답을 만든다.
///
/// 형식이 잘못된 요청은 `InvalidRequest`로 답한다. JSON 숫자는 NaN/∞를 표현할 수
/// 없으므로 응답 값이 비유한이면 `InvalidValue`로 바꾼다.
pub fn handle_json_line(line: &str) -> String {
    let response = match serde_json::from_str::<ConversionRequest>(line) {
        Ok(request) => {
            debug!(?request, "request");
            match handle(&request) {
                ConversionResponse::Value { value } if !value.is_finite() => {
                    ConversionResponse::Error {
                        error: ErrorCode::InvalidValue,
                    }
                }
                other => other,
            }
        }
        Err(err) => {
            warn!(%err, "malformed request");
            ConversionResponse::Error {
                error: ErrorCode::InvalidRequest,
            }
        }
    };
    // 두 variant 모두 f64/unit enum만 담으므로 직렬화는 실패하지 않는다
    serde_json::to_string(&response)
        .unwrap_or_else(|_| String::from(r#"{"error":"InvalidRequest"}"#))
}
