//! 심볼 거래 규칙 조회.

use gateway_core::{GatewayError, GatewayResult, SymbolRule};
use reqwest::Method;
use std::sync::Arc;
use tracing::debug;

use crate::connector::kucoin::types::envelope_data;
use crate::connector::kucoin::{KucoinSymbol, SYMBOLS_PATH};
use crate::ExchangeApi;

/// 심볼 거래 규칙 제공자.
///
/// 요청마다 새로 조회하며 캐시하지 않습니다.
pub struct SymbolRules {
    exchange: Arc<dyn ExchangeApi>,
}

impl SymbolRules {
    pub fn new(exchange: Arc<dyn ExchangeApi>) -> Self {
        Self { exchange }
    }

    /// 심볼의 거래 규칙 조회.
    ///
    /// 심볼은 대소문자를 구분해 정확히 일치해야 합니다.
    ///
    /// # Errors
    /// - 목록에 없으면 `SymbolNotFound`
    /// - 전송/거래소 에러는 그대로 전파
    pub async fn fetch(&self, symbol: &str) -> GatewayResult<SymbolRule> {
        let payload = self.exchange.execute(Method::GET, SYMBOLS_PATH, None).await?;
        let symbols: Vec<KucoinSymbol> = envelope_data(&payload)?;

        debug!("심볼 규칙 {}개 수신", symbols.len());

        symbols
            .into_iter()
            .find(|s| s.symbol == symbol)
            .map(SymbolRule::from)
            .ok_or_else(|| GatewayError::SymbolNotFound(symbol.to_string()))
    }
}
