//! KuCoin REST 응답/요청 타입.

use gateway_core::{Balance, OrderRequest, OrderType, Side, SymbolRule};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ExchangeError, ExchangeResult};

/// 성공 응답 봉투 코드
pub const SUCCESS_CODE: &str = "200000";

/// 심볼 거래 규칙 목록
pub const SYMBOLS_PATH: &str = "/api/v2/symbols";
/// 계정 잔고 목록
pub const ACCOUNTS_PATH: &str = "/api/v1/accounts";
/// 주문 접수
pub const ORDERS_PATH: &str = "/api/v1/orders";

/// 봉투(`{code, data}`)에서 `data`를 꺼내 역직렬화.
///
/// 실패 시 원본 응답 전체를 `Parse` 에러에 담습니다.
pub fn envelope_data<T: DeserializeOwned>(payload: &Value) -> ExchangeResult<T> {
    let data = payload.get("data").cloned().unwrap_or(Value::Null);
    serde_json::from_value(data).map_err(|e| ExchangeError::Parse {
        message: e.to_string(),
        body: payload.to_string(),
    })
}

/// 봉투의 `code` 필드를 문자열로 읽기 (숫자 코드도 허용).
pub fn envelope_code(payload: &Value) -> Option<String> {
    match payload.get("code")? {
        Value::String(code) => Some(code.clone()),
        Value::Number(code) => Some(code.to_string()),
        _ => None,
    }
}

/// `GET /api/v2/symbols` 항목.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KucoinSymbol {
    pub symbol: String,
    #[serde(default)]
    pub base_currency: Option<String>,
    #[serde(default)]
    pub quote_currency: String,
    pub base_min_size: Decimal,
    pub base_increment: Decimal,
    pub price_increment: Decimal,
    #[serde(default = "default_enable_trading")]
    pub enable_trading: bool,
}

fn default_enable_trading() -> bool {
    true
}

impl From<KucoinSymbol> for SymbolRule {
    fn from(raw: KucoinSymbol) -> Self {
        let base_currency = raw
            .base_currency
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| SymbolRule::derive_base_currency(&raw.symbol, &raw.quote_currency));

        SymbolRule {
            symbol: raw.symbol,
            base_currency,
            quote_currency: raw.quote_currency,
            price_increment: raw.price_increment,
            base_increment: raw.base_increment,
            base_min_size: raw.base_min_size,
            enable_trading: raw.enable_trading,
        }
    }
}

/// `GET /api/v1/accounts` 항목.
#[derive(Debug, Clone, Deserialize)]
pub struct KucoinAccount {
    pub currency: String,
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,
    pub available: Decimal,
}

impl From<KucoinAccount> for Balance {
    fn from(raw: KucoinAccount) -> Self {
        Balance {
            currency: raw.currency,
            account_type: raw.account_type,
            available: raw.available,
        }
    }
}

/// `POST /api/v1/orders` 요청 본문.
///
/// 소수는 문자열로 직렬화됩니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KucoinOrderBody {
    pub client_oid: String,
    pub side: Side,
    pub symbol: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    pub size: Decimal,
}

impl From<&OrderRequest> for KucoinOrderBody {
    fn from(order: &OrderRequest) -> Self {
        // 시장가 주문은 가격을 보내지 않음
        let price = match order.order_type {
            OrderType::Limit => order.price,
            OrderType::Market => None,
        };

        Self {
            client_oid: order.client_order_id.clone(),
            side: order.side,
            symbol: order.symbol.clone(),
            order_type: order.order_type,
            price,
            size: order.size,
        }
    }
}

/// 주문 접수 응답의 `data`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KucoinOrderAck {
    pub order_id: String,
}
