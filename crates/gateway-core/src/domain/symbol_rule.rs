//! 심볼별 거래 규칙.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 거래소가 거래쌍에 부과하는 제약.
///
/// 주문 요청마다 새로 조회하며 사용 후 폐기합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolRule {
    /// 거래 심볼 (예: "BTC-USDT")
    pub symbol: String,
    /// 기준 자산 (예: "BTC")
    pub base_currency: String,
    /// 호가 자산 (예: "USDT")
    pub quote_currency: String,
    /// 가격 최소 단위
    pub price_increment: Decimal,
    /// 수량 최소 단위
    pub base_increment: Decimal,
    /// 최소 주문 수량
    pub base_min_size: Decimal,
    /// 거래 가능 여부
    pub enable_trading: bool,
}

impl SymbolRule {
    /// 심볼에서 호가 자산 접미사를 제거해 기준 자산을 구합니다.
    ///
    /// `BTC-USDT` / `USDT` → `BTC`. 접미사가 맞지 않으면 심볼 전체를 반환합니다.
    pub fn derive_base_currency(symbol: &str, quote_currency: &str) -> String {
        symbol
            .strip_suffix(quote_currency)
            .map(|base| base.trim_end_matches('-'))
            .filter(|base| !base.is_empty())
            .unwrap_or(symbol)
            .to_string()
    }
}
