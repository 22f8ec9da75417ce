//! 잔고 조회 및 충분성 검사.

use gateway_core::{select_available, Balance, GatewayError, GatewayResult};
use reqwest::Method;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

use crate::connector::kucoin::types::envelope_data;
use crate::connector::kucoin::{KucoinAccount, ACCOUNTS_PATH};
use crate::ExchangeApi;

/// 잔고 검사기.
///
/// 검사마다 `GET /api/v1/accounts`를 한 번 호출합니다.
/// 같은 통화의 항목이 여러 개면 `trade` 계정만 주문 가능 잔고로 봅니다.
pub struct BalanceChecker {
    exchange: Arc<dyn ExchangeApi>,
}

impl BalanceChecker {
    pub fn new(exchange: Arc<dyn ExchangeApi>) -> Self {
        Self { exchange }
    }

    /// 전체 계정 잔고 조회.
    pub async fn balances(&self) -> GatewayResult<Vec<Balance>> {
        let payload = self.exchange.execute(Method::GET, ACCOUNTS_PATH, None).await?;
        let accounts: Vec<KucoinAccount> = envelope_data(&payload)?;
        Ok(accounts.into_iter().map(Balance::from).collect())
    }

    /// 통화의 주문 가능 잔고 (없으면 0).
    pub async fn available(&self, currency: &str) -> GatewayResult<Decimal> {
        let balances = self.balances().await?;
        Ok(select_available(&balances, currency))
    }

    /// `available >= required` 여부.
    pub async fn sufficient(&self, currency: &str, required: Decimal) -> GatewayResult<bool> {
        Ok(self.available(currency).await? >= required)
    }

    /// 잔고 검사.
    ///
    /// 충분하면 가용 잔고를 반환하고, 부족하면 `InsufficientBalance`를 반환합니다.
    pub async fn check(&self, currency: &str, required: Decimal) -> GatewayResult<Decimal> {
        let available = self.available(currency).await?;
        debug!(
            "잔고 검사: {} available={} required={}",
            currency, available, required
        );

        if available >= required {
            Ok(available)
        } else {
            Err(GatewayError::InsufficientBalance {
                currency: currency.to_string(),
                available,
                required,
            })
        }
    }
}
