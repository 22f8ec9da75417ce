//! 거래소 trait 정의.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::ExchangeError;

/// 거래소 작업을 위한 Result 타입.
pub type ExchangeResult<T> = Result<T, ExchangeError>;

/// 인증된 거래소 요청 인터페이스.
///
/// 구현체는 호출당 정확히 한 번 HTTP 요청을 보내며 재시도하지 않습니다.
#[async_trait]
pub trait ExchangeApi: Send + Sync {
    /// 서명된 요청을 실행하고 파싱된 응답 전체를 반환.
    ///
    /// # Arguments
    /// * `method` - HTTP 메서드
    /// * `path` - 선행 `/`와 쿼리 문자열을 포함한 경로
    /// * `body` - JSON 본문 (GET은 None)
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> ExchangeResult<Value>;
}
