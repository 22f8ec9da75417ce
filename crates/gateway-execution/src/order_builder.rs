//! 주문 빌더.
//!
//! 검증 순서 (앞 단계가 실패하면 즉시 중단):
//! 1. 필수 필드 검사
//! 2. 심볼 거래 규칙 조회
//! 3. 가격/수량 정규화
//! 4. 잔고 검사 (매수: 호가 통화, 매도: 기준 통화)
//! 5. clientOid 생성 후 주문 제출
//!
//! 5단계 이전에는 주문 API를 호출하지 않습니다.

use gateway_core::{
    round_to_increment, GatewayError, GatewayResult, OrderRequest, OrderResult, OrderType, Side,
    SymbolRule,
};
use gateway_exchange::connector::kucoin::types::envelope_data;
use gateway_exchange::connector::kucoin::{KucoinOrderAck, KucoinOrderBody, ORDERS_PATH};
use gateway_exchange::{BalanceChecker, ExchangeApi, SymbolRules};
use reqwest::Method;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// 정규화된 가격/수량.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedOrder {
    pub price: Option<Decimal>,
    pub size: Decimal,
}

/// 거래 규칙에 맞게 가격과 수량을 정규화.
///
/// - 가격: `priceIncrement` 단위로 내림
/// - 수량: `baseMinSize`까지 올린 뒤 `baseIncrement` 단위로 내림.
///   내림 결과가 `baseMinSize`보다 작으면 한 단위를 더함
///
/// # Errors
/// 가격이나 수량이 0으로 정규화되거나 `Decimal` 범위를 넘으면
/// `Validation`을 반환합니다.
pub fn normalize(
    rule: &SymbolRule,
    raw_price: Option<Decimal>,
    raw_size: Decimal,
) -> GatewayResult<NormalizedOrder> {
    let price = match raw_price {
        Some(raw) => {
            let price = round_to_increment(raw, rule.price_increment)
                .ok_or_else(|| out_of_range("price", raw))?;
            if price <= Decimal::ZERO {
                return Err(GatewayError::Validation(format!(
                    "가격 {}이(가) 가격 단위 {}보다 작습니다",
                    raw, rule.price_increment
                )));
            }
            Some(price)
        }
        None => None,
    };

    let mut size = round_to_increment(raw_size.max(rule.base_min_size), rule.base_increment)
        .ok_or_else(|| out_of_range("size", raw_size))?;
    if size < rule.base_min_size {
        size = size
            .checked_add(rule.base_increment)
            .ok_or_else(|| out_of_range("size", raw_size))?;
    }
    if size <= Decimal::ZERO {
        return Err(GatewayError::Validation(format!(
            "수량 {}이(가) 수량 단위 {}보다 작습니다",
            raw_size, rule.base_increment
        )));
    }

    Ok(NormalizedOrder { price, size })
}

fn out_of_range(field: &str, value: Decimal) -> GatewayError {
    GatewayError::Validation(format!("{} 값이 처리 가능한 범위를 넘습니다: {}", field, value))
}

/// 필수 필드 검사.
fn validate_input(
    symbol: &str,
    raw_price: Option<Decimal>,
    raw_size: Option<Decimal>,
    order_type: OrderType,
) -> GatewayResult<Decimal> {
    if symbol.is_empty() {
        return Err(GatewayError::Validation("symbol은 필수입니다".into()));
    }

    let size = match raw_size {
        None => return Err(GatewayError::Validation("size는 필수입니다".into())),
        Some(size) if size <= Decimal::ZERO => {
            return Err(GatewayError::Validation(format!(
                "size는 0보다 커야 합니다: {}",
                size
            )))
        }
        Some(size) => size,
    };

    match raw_price {
        None if order_type.requires_price() => Err(GatewayError::Validation(
            "지정가 주문에는 price가 필수입니다".into(),
        )),
        Some(price) if price <= Decimal::ZERO => Err(GatewayError::Validation(format!(
            "price는 0보다 커야 합니다: {}",
            price
        ))),
        _ => Ok(size),
    }
}

/// 주문 빌더.
///
/// 요청 간 공유 상태가 없으며, 한 번의 호출은 최대 세 번의 거래소 요청
/// (거래 규칙, 잔고, 주문)을 순차적으로 수행합니다.
pub struct OrderBuilder {
    exchange: Arc<dyn ExchangeApi>,
    symbol_rules: SymbolRules,
    balances: BalanceChecker,
}

impl OrderBuilder {
    pub fn new(exchange: Arc<dyn ExchangeApi>) -> Self {
        Self {
            symbol_rules: SymbolRules::new(exchange.clone()),
            balances: BalanceChecker::new(exchange.clone()),
            exchange,
        }
    }

    /// 주문 검증, 정규화 후 제출.
    ///
    /// # Arguments
    /// * `symbol` - 거래쌍 (예: "BTC-USDT", 대문자로 변환됨)
    /// * `side` - 매수/매도
    /// * `raw_price` - 가격 (지정가 필수, 시장가는 잔고 검사용 참고값)
    /// * `raw_size` - 기준 통화 수량
    /// * `order_type` - 지정가/시장가
    ///
    /// # Errors
    /// - `Validation`: 필수 필드 누락, 0 이하 값, 범위 초과 값, 거래 중지 심볼
    /// - `SymbolNotFound`: 거래 규칙 없음
    /// - `InsufficientBalance`: 잔고 부족
    /// - `Transport` / `Exchange`: 거래소 호출 실패 (그대로 전파)
    pub async fn build_and_submit(
        &self,
        symbol: &str,
        side: Side,
        raw_price: Option<Decimal>,
        raw_size: Option<Decimal>,
        order_type: OrderType,
    ) -> GatewayResult<OrderResult> {
        let symbol = symbol.trim().to_uppercase();
        let raw_size = validate_input(&symbol, raw_price, raw_size, order_type)?;

        let rule = self.symbol_rules.fetch(&symbol).await?;
        if !rule.enable_trading {
            return Err(GatewayError::Validation(format!(
                "{} 거래가 중지된 심볼입니다",
                symbol
            )));
        }

        let normalized = normalize(&rule, raw_price, raw_size)?;
        debug!(
            "{} 정규화: price {:?} -> {:?}, size {} -> {}",
            symbol, raw_price, normalized.price, raw_size, normalized.size
        );

        match side {
            Side::Buy => match normalized.price {
                Some(price) => {
                    let required = price
                        .checked_mul(normalized.size)
                        .ok_or_else(|| out_of_range("price * size", price))?;
                    self.balances.check(&rule.quote_currency, required).await?;
                }
                None => {
                    warn!(
                        "{} 시장가 매수에 참고 가격이 없어 잔고 검사를 거래소에 맡깁니다",
                        symbol
                    );
                }
            },
            Side::Sell => {
                self.balances
                    .check(&rule.base_currency, normalized.size)
                    .await?;
            }
        }

        // 시장가의 참고 가격은 잔고 검사에만 쓰고 전송하지 않음
        let price = match order_type {
            OrderType::Limit => normalized.price,
            OrderType::Market => None,
        };

        let order = OrderRequest {
            symbol,
            side,
            order_type,
            price,
            size: normalized.size,
            client_order_id: Uuid::new_v4().simple().to_string(),
        };

        self.submit(order).await
    }

    /// 주문 제출 (한 번만 전송, 재시도 없음).
    async fn submit(&self, order: OrderRequest) -> GatewayResult<OrderResult> {
        let body = serde_json::to_value(KucoinOrderBody::from(&order))
            .map_err(|e| GatewayError::Validation(format!("주문 본문 직렬화 실패: {}", e)))?;

        info!(
            symbol = %order.symbol,
            side = %order.side,
            order_type = %order.order_type,
            price = ?order.price,
            size = %order.size,
            client_oid = %order.client_order_id,
            "주문 제출"
        );

        let payload = self
            .exchange
            .execute(Method::POST, ORDERS_PATH, Some(&body))
            .await?;
        let ack: KucoinOrderAck = envelope_data(&payload)?;

        info!("주문 접수: {} (clientOid={})", ack.order_id, order.client_order_id);

        Ok(OrderResult {
            order_id: ack.order_id,
            client_order_id: order.client_order_id.clone(),
            request: order,
            raw: payload,
        })
    }
}
