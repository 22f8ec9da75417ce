//! 애플리케이션 공유 상태.

use chrono::{DateTime, Utc};
use gateway_core::{GatewayError, GatewayResult};
use gateway_exchange::{BalanceChecker, ExchangeApi};
use gateway_execution::OrderBuilder;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// 한 요청이 수행하는 최대 거래소 호출 수 (거래 규칙, 잔고, 주문)
pub const MAX_EXCHANGE_CALLS: u64 = 3;

/// 기본 거래소 호출 타임아웃(초)
const DEFAULT_EXCHANGE_TIMEOUT_SECS: u64 = 10;

/// 거래소 호출 타임아웃으로부터 요청 처리 기한 계산.
///
/// 순차 호출이 모두 타임아웃까지 걸려도 거래소 쪽 `Transport` 에러가
/// 먼저 도착하도록 1초 여유를 둡니다.
pub fn deadline_for(exchange_timeout_secs: u64) -> Duration {
    Duration::from_secs(
        exchange_timeout_secs
            .saturating_mul(MAX_EXCHANGE_CALLS)
            .saturating_add(1),
    )
}

/// 모든 핸들러가 공유하는 상태.
///
/// 요청 간 가변 상태가 없으며, 거래소 클라이언트는 읽기 전용으로 공유됩니다.
pub struct AppState {
    /// 서명된 거래소 요청
    pub exchange: Arc<dyn ExchangeApi>,
    /// 주문 검증/제출
    pub orders: OrderBuilder,
    /// 잔고 조회
    pub balances: BalanceChecker,
    /// 서버 시작 시각
    pub started_at: DateTime<Utc>,
    /// API 버전
    pub version: String,
    /// 핸들러 처리 기한 (초과 시 `Transport` 에러)
    pub deadline: Duration,
}

impl AppState {
    pub fn new(exchange: Arc<dyn ExchangeApi>) -> Self {
        Self {
            orders: OrderBuilder::new(exchange.clone()),
            balances: BalanceChecker::new(exchange.clone()),
            exchange,
            started_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            deadline: deadline_for(DEFAULT_EXCHANGE_TIMEOUT_SECS),
        }
    }

    /// 처리 기한 설정.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// 처리 기한 안에 작업을 실행합니다.
    ///
    /// 기한을 넘기면 `GatewayError::Transport`를 반환합니다.
    pub async fn within<T, F>(&self, task: F) -> GatewayResult<T>
    where
        F: Future<Output = GatewayResult<T>>,
    {
        tokio::time::timeout(self.deadline, task)
            .await
            .unwrap_or_else(|_| {
                Err(GatewayError::Transport(format!(
                    "거래소 응답 대기 시간 초과 ({}초)",
                    self.deadline.as_secs()
                )))
            })
    }

    /// 서버 업타임(초).
    pub fn uptime_secs(&self) -> i64 {
        Utc::now().signed_duration_since(self.started_at).num_seconds()
    }
}

/// 테스트용 상태 생성.
///
/// BTC-USDT 규칙, 충분한 USDT/BTC 잔고, 주문 접수 응답이 준비된
/// `MockExchange`를 사용합니다.
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state() -> AppState {
    use gateway_exchange::mock::{btc_usdt_symbol, MockExchange};
    use serde_json::json;

    let exchange = MockExchange::new()
        .with_symbols(json!([btc_usdt_symbol()]))
        .with_accounts(json!([
            {"currency": "USDT", "type": "main", "available": "5000"},
            {"currency": "USDT", "type": "trade", "available": "1000"},
            {"currency": "BTC", "type": "trade", "available": "0.5"}
        ]))
        .with_order_ack("5c35c02703aa673ceec2a168");

    AppState::new(Arc::new(exchange))
}
