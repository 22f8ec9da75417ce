//! 테스트용 스크립트 기반 거래소.
//!
//! 실제 네트워크 없이 `(메서드, 경로)` 별로 미리 정한 응답을 돌려주고
//! 모든 호출을 기록합니다. 등록되지 않은 경로는 HTTP 404 `Api` 에러입니다.
//! `with_stall`로 등록한 경로는 응답하지 않고 영원히 대기합니다.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use tokio::sync::Mutex;

use crate::connector::kucoin::{ACCOUNTS_PATH, ORDERS_PATH, SYMBOLS_PATH};
use crate::{ExchangeApi, ExchangeError, ExchangeResult};

/// 기록된 호출.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// 스크립트 기반 Mock 거래소.
#[derive(Debug, Default)]
pub struct MockExchange {
    responses: Mutex<HashMap<(Method, String), ExchangeResult<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
    stalled: HashSet<(Method, String)>,
}

impl MockExchange {
    pub fn new() -> Self {
        Self::default()
    }

    /// 성공 응답 등록.
    pub fn with_response(mut self, method: Method, path: &str, payload: Value) -> Self {
        self.responses
            .get_mut()
            .insert((method, path.to_string()), Ok(payload));
        self
    }

    /// 에러 응답 등록.
    pub fn with_error(mut self, method: Method, path: &str, error: ExchangeError) -> Self {
        self.responses
            .get_mut()
            .insert((method, path.to_string()), Err(error));
        self
    }

    /// 응답하지 않는 경로 등록 (거래소 지연 재현).
    pub fn with_stall(mut self, method: Method, path: &str) -> Self {
        self.stalled.insert((method, path.to_string()));
        self
    }

    /// 심볼 목록 응답 등록 (`data` 배열).
    pub fn with_symbols(self, symbols: Value) -> Self {
        self.with_response(
            Method::GET,
            SYMBOLS_PATH,
            json!({"code": "200000", "data": symbols}),
        )
    }

    /// 계정 목록 응답 등록 (`data` 배열).
    pub fn with_accounts(self, accounts: Value) -> Self {
        self.with_response(
            Method::GET,
            ACCOUNTS_PATH,
            json!({"code": "200000", "data": accounts}),
        )
    }

    /// 주문 접수 성공 응답 등록.
    pub fn with_order_ack(self, order_id: &str) -> Self {
        self.with_response(
            Method::POST,
            ORDERS_PATH,
            json!({"code": "200000", "data": {"orderId": order_id}}),
        )
    }

    /// 지금까지 기록된 모든 호출.
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    /// 특정 `(메서드, 경로)`로의 호출만.
    pub async fn calls_to(&self, method: Method, path: &str) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ExchangeApi for MockExchange {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> ExchangeResult<Value> {
        self.calls.lock().await.push(RecordedCall {
            method: method.clone(),
            path: path.to_string(),
            body: body.cloned(),
        });

        if self.stalled.contains(&(method.clone(), path.to_string())) {
            return std::future::pending().await;
        }

        self.responses
            .lock()
            .await
            .get(&(method, path.to_string()))
            .cloned()
            .unwrap_or_else(|| {
                Err(ExchangeError::Api {
                    status: 404,
                    payload: json!({"code": "404000", "msg": "Not Found"}).to_string(),
                })
            })
    }
}

/// BTC-USDT 심볼 규칙 샘플 (`priceIncrement` 0.01, `baseIncrement` 0.0001, `baseMinSize` 0.0001).
pub fn btc_usdt_symbol() -> Value {
    json!({
        "symbol": "BTC-USDT",
        "baseCurrency": "BTC",
        "quoteCurrency": "USDT",
        "baseMinSize": "0.0001",
        "baseIncrement": "0.0001",
        "priceIncrement": "0.01",
        "enableTrading": true
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_response_and_recording() {
        let mock = MockExchange::new().with_order_ack("ord-1");
        let body = json!({"clientOid": "abc"});

        let value = mock
            .execute(Method::POST, ORDERS_PATH, Some(&body))
            .await
            .unwrap();
        assert_eq!(value["data"]["orderId"], "ord-1");

        let calls = mock.calls_to(Method::POST, ORDERS_PATH).await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].body.as_ref(), Some(&body));
    }

    #[tokio::test]
    async fn test_stalled_route_never_resolves() {
        let mock = MockExchange::new()
            .with_symbols(json!([btc_usdt_symbol()]))
            .with_stall(Method::GET, SYMBOLS_PATH);

        let pending = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            mock.execute(Method::GET, SYMBOLS_PATH, None),
        )
        .await;
        assert!(pending.is_err());
        assert_eq!(mock.calls().await.len(), 1);
    }

    #[tokio::test]
    async fn test_unregistered_route_is_404() {
        let mock = MockExchange::new();
        let err = mock
            .execute(Method::GET, ACCOUNTS_PATH, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ExchangeError::Api { status: 404, .. }));
        assert_eq!(mock.calls().await.len(), 1);
    }
}
