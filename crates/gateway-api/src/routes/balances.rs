//! 잔고 조회 endpoint.
//!
//! # 엔드포인트
//!
//! - `GET /balances` - 거래소 계정 목록 원문
//! - `GET /balances/{currency}` - 통화별 주문 가능 잔고

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use gateway_core::GatewayError;
use gateway_exchange::connector::kucoin::ACCOUNTS_PATH;
use reqwest::Method;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::error::{gateway_error, ApiResult};
use crate::state::AppState;

/// 통화별 잔고 응답.
#[derive(Debug, Serialize, Deserialize)]
pub struct CurrencyBalanceResponse {
    pub currency: String,
    pub available: Decimal,
}

/// 거래소 계정 목록 조회.
///
/// GET /balances
pub async fn get_balances(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let payload = state
        .within(async {
            state
                .exchange
                .execute(Method::GET, ACCOUNTS_PATH, None)
                .await
                .map_err(GatewayError::from)
        })
        .await
        .map_err(gateway_error)?;

    Ok(Json(payload))
}

/// 통화별 주문 가능 잔고 조회.
///
/// GET /balances/{currency}
pub async fn get_currency_balance(
    State(state): State<Arc<AppState>>,
    Path(currency): Path<String>,
) -> ApiResult<Json<CurrencyBalanceResponse>> {
    let currency = currency.to_uppercase();
    let available = state
        .within(state.balances.available(&currency))
        .await
        .map_err(gateway_error)?;

    Ok(Json(CurrencyBalanceResponse {
        currency,
        available,
    }))
}

/// 잔고 라우터 생성.
pub fn balances_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/balances", get(get_balances))
        .route("/balances/{currency}", get(get_currency_balance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorResponse;
    use crate::state::create_test_state;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use gateway_exchange::mock::MockExchange;
    use gateway_exchange::ExchangeError;
    use std::time::Duration;
    use tower::ServiceExt;

    async fn get(state: AppState, uri: &str) -> (StatusCode, Value) {
        let response = balances_router()
            .with_state(Arc::new(state))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_get_balances_returns_raw_payload() {
        let (status, body) = get(create_test_state(), "/balances").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], "200000");
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_get_currency_balance_uses_trade_account() {
        let (status, body) = get(create_test_state(), "/balances/usdt").await;

        assert_eq!(status, StatusCode::OK);
        let balance: CurrencyBalanceResponse = serde_json::from_value(body).unwrap();
        assert_eq!(balance.currency, "USDT");
        assert_eq!(balance.available, Decimal::from(1000));
    }

    #[tokio::test]
    async fn test_exchange_error_is_500_with_payload() {
        let exchange = MockExchange::new().with_error(
            Method::GET,
            ACCOUNTS_PATH,
            ExchangeError::Api {
                status: 401,
                payload: r#"{"code":"400005","msg":"Invalid KC-API-SIGN"}"#.into(),
            },
        );
        let (status, body) = get(AppState::new(Arc::new(exchange)), "/balances").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error: ApiErrorResponse = serde_json::from_value(body).unwrap();
        assert_eq!(error.code, "EXCHANGE_ERROR");
        let details = error.details.unwrap();
        assert_eq!(details["status"], 401);
        assert_eq!(details["payload"]["code"], "400005");
    }

    #[tokio::test]
    async fn test_transport_error_is_500() {
        let exchange = MockExchange::new().with_error(
            Method::GET,
            ACCOUNTS_PATH,
            ExchangeError::Transport("request timed out".into()),
        );
        let (status, body) = get(AppState::new(Arc::new(exchange)), "/balances/BTC").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "TRANSPORT_ERROR");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_accounts_is_transport_error() {
        for uri in ["/balances", "/balances/BTC"] {
            let exchange = MockExchange::new().with_stall(Method::GET, ACCOUNTS_PATH);
            let state = AppState::new(Arc::new(exchange)).with_deadline(Duration::from_secs(5));

            let (status, body) = get(state, uri).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
            assert_eq!(body["code"], "TRANSPORT_ERROR", "{}", uri);
        }
    }
}
