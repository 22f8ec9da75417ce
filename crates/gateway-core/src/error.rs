//! 게이트웨이 에러 타입.
//!
//! 주문/잔고 처리 중 발생하는 모든 실패는 이 닫힌 집합 중 하나로 분류되어
//! HTTP 경계까지 종류를 유지한 채 전파됩니다.

use rust_decimal::Decimal;
use thiserror::Error;

/// 핵심 게이트웨이 에러.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// 누락되었거나 잘못된 호출자 입력
    #[error("잘못된 요청: {0}")]
    Validation(String),

    /// 거래소에 존재하지 않는 거래쌍
    #[error("심볼을 찾을 수 없음: {0}")]
    SymbolNotFound(String),

    /// 주문 전 로컬 잔고 검사 실패
    #[error("잔고 부족: {currency} 사용 가능 {available}, 필요 {required}")]
    InsufficientBalance {
        currency: String,
        available: Decimal,
        required: Decimal,
    },

    /// 네트워크/DNS/타임아웃
    #[error("전송 에러: {0}")]
    Transport(String),

    /// 거래소가 반환한 에러 (페이로드 원문 유지)
    #[error("거래소 에러 (HTTP {status}): {payload}")]
    Exchange { status: u16, payload: String },
}

/// 게이트웨이 작업을 위한 Result 타입.
pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    /// 응답 본문에 쓰이는 안정적인 에러 코드.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Validation(_) => "VALIDATION_ERROR",
            GatewayError::SymbolNotFound(_) => "SYMBOL_NOT_FOUND",
            GatewayError::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            GatewayError::Transport(_) => "TRANSPORT_ERROR",
            GatewayError::Exchange { .. } => "EXCHANGE_ERROR",
        }
    }

    /// 호출자 입력 또는 로컬 검사에서 발생한 에러인지 확인합니다.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            GatewayError::Validation(_)
                | GatewayError::SymbolNotFound(_)
                | GatewayError::InsufficientBalance { .. }
        )
    }

    /// 재시도 가능한 에러인지 확인합니다.
    ///
    /// 전송 에러만 해당하며, 재시도 시 새 clientOid를 사용해야 합니다.
    /// 거래소 에러의 재시도 안전성은 거래소 문서에 따르므로 가정하지 않습니다.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatewayError::Transport(_))
    }
}
