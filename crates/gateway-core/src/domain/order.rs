//! 주문 타입.
//!
//! 이 모듈은 게이트웨이의 주문 관련 타입을 정의합니다:
//! - `Side` - 주문 방향 (매수/매도)
//! - `OrderType` - 주문 유형 (지정가, 시장가)
//! - `OrderRequest` - 정규화가 끝난 제출용 주문
//! - `OrderResult` - 거래소 접수 결과

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 주문 방향 (매수 또는 매도).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// 매수
    Buy,
    /// 매도
    Sell,
}

impl Side {
    /// 거래소 와이어 형식 ("buy" / "sell").
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 주문 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// 지정가 주문 - 가격 필수
    #[default]
    Limit,
    /// 시장가 주문 - 가격 미전송
    Market,
}

impl OrderType {
    /// 거래소 와이어 형식 ("limit" / "market").
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Limit => "limit",
            OrderType::Market => "market",
        }
    }

    /// 가격이 필수인 주문 유형인지 확인합니다.
    pub fn requires_price(&self) -> bool {
        matches!(self, OrderType::Limit)
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 거래소에 제출할 주문 요청.
///
/// 가격과 수량은 이미 심볼 규칙에 맞게 정규화된 값입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// 거래 심볼 (예: "BTC-USDT")
    pub symbol: String,
    /// 주문 방향
    pub side: Side,
    /// 주문 유형
    pub order_type: OrderType,
    /// 지정가 (지정가 주문에만 존재)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// 기준 자산 수량
    pub size: Decimal,
    /// 멱등성 토큰 (주문 시도마다 새로 생성)
    pub client_order_id: String,
}

impl OrderRequest {
    /// 주문의 명목 가치를 계산합니다.
    pub fn notional_value(&self) -> Option<Decimal> {
        self.price.map(|p| p * self.size)
    }
}

/// 거래소 주문 접수 결과.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResult {
    /// 거래소 주문 ID
    pub order_id: String,
    /// 제출한 클라이언트 주문 ID
    pub client_order_id: String,
    /// 실제로 제출된 (정규화된) 주문
    pub request: OrderRequest,
    /// 거래소 응답 원문
    pub raw: serde_json::Value,
}
