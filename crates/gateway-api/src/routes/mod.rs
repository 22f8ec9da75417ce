//! REST API 라우트.
//!
//! # 엔드포인트
//!
//! - `GET /health` - 헬스 체크
//! - `GET /balances`, `GET /balances/{currency}` - 잔고 조회
//! - `POST /buy`, `POST /sell` - 주문 제출

pub mod balances;
pub mod health;
pub mod orders;

use axum::http::StatusCode;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub use balances::{balances_router, CurrencyBalanceResponse};
pub use health::{health_router, HealthResponse};
pub use orders::{orders_router, TradeRequest, TradeResponse};

/// 핸들러 처리 기한 이후 전역 타임아웃까지의 여유
pub const REQUEST_TIMEOUT_MARGIN: Duration = Duration::from_secs(5);

/// API 라우터 생성 (상태 미적용).
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health_router())
        .merge(balances_router())
        .merge(orders_router())
}

/// 미들웨어까지 적용된 전체 라우터 생성.
///
/// 전역 타임아웃(408)은 핸들러 처리 기한보다 항상 길어서, 거래소 지연은
/// `TRANSPORT_ERROR` 응답으로 먼저 끝납니다.
pub fn create_router(state: Arc<AppState>) -> Router {
    let request_timeout = state.deadline.saturating_add(REQUEST_TIMEOUT_MARGIN);

    create_api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
}
