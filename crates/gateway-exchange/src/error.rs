//! 거래소 에러 타입.

use gateway_core::GatewayError;
use thiserror::Error;

/// 거래소 관련 에러.
#[derive(Debug, Clone, Error)]
pub enum ExchangeError {
    /// 네트워크/연결/타임아웃 에러
    #[error("Transport error: {0}")]
    Transport(String),

    /// 거래소가 거부한 요청 (HTTP 상태 >= 400 또는 에러 봉투 코드)
    #[error("API error (HTTP {status}): {payload}")]
    Api { status: u16, payload: String },

    /// 파싱/역직렬화 에러
    #[error("Parse error: {message}")]
    Parse { message: String, body: String },
}

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ExchangeError::Transport(format!("request timed out: {}", err))
        } else {
            ExchangeError::Transport(err.to_string())
        }
    }
}

impl From<ExchangeError> for GatewayError {
    fn from(err: ExchangeError) -> Self {
        match err {
            ExchangeError::Transport(msg) => GatewayError::Transport(msg),
            ExchangeError::Api { status, payload } => GatewayError::Exchange { status, payload },
            ExchangeError::Parse { body, .. } => GatewayError::Exchange {
                status: 200,
                payload: body,
            },
        }
    }
}
