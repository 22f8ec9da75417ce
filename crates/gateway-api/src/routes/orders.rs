//! 주문 endpoint.
//!
//! # 엔드포인트
//!
//! - `POST /buy` - 매수 주문
//! - `POST /sell` - 매도 주문
//!
//! 본문: `{symbol, price?, size, type?}` (`type` 기본값 `limit`, 소수는 문자열/숫자 모두 허용)

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use gateway_core::{GatewayError, OrderResult, OrderType, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::error::{gateway_error, ApiResult};
use crate::state::AppState;

/// 주문 요청 본문.
#[derive(Debug, Deserialize)]
pub struct TradeRequest {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub size: Option<Decimal>,
    #[serde(rename = "type", default)]
    pub order_type: OrderType,
}

/// 주문 접수 응답.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResponse {
    pub order_id: String,
    pub client_oid: String,
    pub symbol: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    pub size: Decimal,
    /// 거래소 응답 원문
    pub exchange: Value,
}

impl From<OrderResult> for TradeResponse {
    fn from(result: OrderResult) -> Self {
        Self {
            order_id: result.order_id,
            client_oid: result.client_order_id,
            symbol: result.request.symbol,
            side: result.request.side,
            order_type: result.request.order_type,
            price: result.request.price,
            size: result.request.size,
            exchange: result.raw,
        }
    }
}

async fn place(
    state: &AppState,
    side: Side,
    payload: Result<Json<TradeRequest>, JsonRejection>,
) -> ApiResult<Json<TradeResponse>> {
    // 잘못된 JSON 본문도 입력 검증 실패로 처리
    let Json(request) =
        payload.map_err(|e| gateway_error(GatewayError::Validation(e.body_text())))?;

    let result = state
        .within(state.orders.build_and_submit(
            &request.symbol,
            side,
            request.price,
            request.size,
            request.order_type,
        ))
        .await
        .map_err(gateway_error)?;

    Ok(Json(TradeResponse::from(result)))
}

/// 매수 주문.
///
/// POST /buy
pub async fn buy(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TradeRequest>, JsonRejection>,
) -> ApiResult<Json<TradeResponse>> {
    place(&state, Side::Buy, payload).await
}

/// 매도 주문.
///
/// POST /sell
pub async fn sell(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TradeRequest>, JsonRejection>,
) -> ApiResult<Json<TradeResponse>> {
    place(&state, Side::Sell, payload).await
}

/// 주문 라우터 생성.
pub fn orders_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/buy", post(buy))
        .route("/sell", post(sell))
}
