//! API 에러 응답 타입.
//!
//! 모든 엔드포인트는 실패 시 같은 형식의 본문을 반환합니다.
//!
//! ```json
//! {
//!   "code": "INSUFFICIENT_BALANCE",
//!   "message": "잔고 부족: USDT 사용 가능 1, 필요 3.000012",
//!   "details": {"currency": "USDT", "available": "1", "required": "3.000012"}
//! }
//! ```

use axum::http::StatusCode;
use axum::Json;
use gateway_core::GatewayError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// API 에러 응답.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// 에러 코드 (예: "VALIDATION_ERROR", "EXCHANGE_ERROR")
    pub code: String,
    /// 사람이 읽을 수 있는 에러 메시지
    pub message: String,
    /// 추가 에러 상세 정보 (선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// 상세 정보 포함 에러 생성.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

impl From<&GatewayError> for ApiErrorResponse {
    fn from(err: &GatewayError) -> Self {
        match err {
            GatewayError::InsufficientBalance {
                currency,
                available,
                required,
            } => Self::with_details(
                err.kind(),
                err.to_string(),
                json!({
                    "currency": currency,
                    "available": available,
                    "required": required,
                }),
            ),
            GatewayError::Exchange { status, payload } => {
                // 거래소 페이로드는 JSON이면 그대로, 아니면 문자열로
                let payload = serde_json::from_str::<Value>(payload)
                    .unwrap_or_else(|_| Value::String(payload.clone()));
                Self::with_details(
                    err.kind(),
                    err.to_string(),
                    json!({"status": status, "payload": payload}),
                )
            }
            _ => Self::new(err.kind(), err.to_string()),
        }
    }
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiErrorResponse {}

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiErrorResponse>)>;

/// 게이트웨이 에러의 HTTP 상태 코드.
///
/// 호출자 입력/로컬 검사 실패는 400, 전송/거래소 실패는 500입니다.
pub fn status_for(err: &GatewayError) -> StatusCode {
    if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// 핸들러에서 `map_err`로 사용하는 변환 함수.
pub fn gateway_error(err: GatewayError) -> (StatusCode, Json<ApiErrorResponse>) {
    (status_for(&err), Json(ApiErrorResponse::from(&err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&GatewayError::Validation("size".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&GatewayError::SymbolNotFound("X".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&GatewayError::Transport("timeout".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&GatewayError::Exchange {
                status: 400,
                payload: "{}".into()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_insufficient_balance_details() {
        let err = GatewayError::InsufficientBalance {
            currency: "USDT".into(),
            available: dec!(1),
            required: dec!(3.000012),
        };
        let body = ApiErrorResponse::from(&err);

        assert_eq!(body.code, "INSUFFICIENT_BALANCE");
        let details = body.details.unwrap();
        assert_eq!(details["currency"], "USDT");
        assert_eq!(details["available"], "1");
        assert_eq!(details["required"], "3.000012");
    }

    #[test]
    fn test_exchange_payload_kept_as_json() {
        let err = GatewayError::Exchange {
            status: 400,
            payload: r#"{"code":"400100","msg":"Invalid size"}"#.into(),
        };
        let details = ApiErrorResponse::from(&err).details.unwrap();
        assert_eq!(details["status"], 400);
        assert_eq!(details["payload"]["code"], "400100");

        let err = GatewayError::Exchange {
            status: 502,
            payload: "Bad Gateway".into(),
        };
        let details = ApiErrorResponse::from(&err).details.unwrap();
        assert_eq!(details["payload"], "Bad Gateway");
    }

    #[test]
    fn test_serialization_omits_empty_details() {
        let json = serde_json::to_string(&ApiErrorResponse::new("TRANSPORT_ERROR", "timeout")).unwrap();
        assert!(!json.contains("details"));
        assert!(json.contains(r#""code":"TRANSPORT_ERROR""#));
    }
}
