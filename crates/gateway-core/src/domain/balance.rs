//! 계좌 잔고.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 거래에 사용할 하위 계좌 유형.
pub const TRADE_ACCOUNT_TYPE: &str = "trade";

/// 조회 시점의 통화별 잔고 스냅샷.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// 통화 (예: "BTC", "USDT")
    pub currency: String,
    /// 하위 계좌 유형 (예: "main", "trade"), 데이터에 없으면 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    /// 사용 가능한 잔고
    pub available: Decimal,
}

impl Balance {
    /// 거래용 하위 계좌인지 확인합니다.
    pub fn is_trade_account(&self) -> bool {
        self.account_type.as_deref() == Some(TRADE_ACCOUNT_TYPE)
    }
}

/// 계좌 목록에서 통화의 사용 가능 잔고를 선택합니다.
///
/// 같은 통화가 여러 하위 계좌에 있을 수 있습니다. 일치하는 항목 중 하나라도
/// 계좌 유형을 가지고 있으면 `trade` 계좌만 인정하고(없으면 0), 유형 정보가
/// 전혀 없으면 첫 번째 일치 항목을 사용합니다.
pub fn select_available(balances: &[Balance], currency: &str) -> Decimal {
    let matches: Vec<&Balance> = balances.iter().filter(|b| b.currency == currency).collect();
    let typed = matches.iter().any(|b| b.account_type.is_some());

    let selected = if typed {
        matches.iter().find(|b| b.is_trade_account())
    } else {
        matches.first()
    };

    selected.map(|b| b.available).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn balance(currency: &str, account_type: Option<&str>, available: Decimal) -> Balance {
        Balance {
            currency: currency.into(),
            account_type: account_type.map(str::to_string),
            available,
        }
    }

    #[test]
    fn test_trade_account_preferred() {
        let balances = vec![
            balance("USDT", Some("main"), dec!(1000)),
            balance("USDT", Some("trade"), dec!(300)),
            balance("BTC", Some("trade"), dec!(0.5)),
        ];
        assert_eq!(select_available(&balances, "USDT"), dec!(300));
        assert_eq!(select_available(&balances, "BTC"), dec!(0.5));
    }

    #[test]
    fn test_main_only_is_not_tradable() {
        let balances = vec![balance("USDT", Some("main"), dec!(1000))];
        assert_eq!(select_available(&balances, "USDT"), Decimal::ZERO);
    }

    #[test]
    fn test_untyped_uses_first_match() {
        let balances = vec![
            balance("ETH", None, dec!(2)),
            balance("ETH", None, dec!(7)),
        ];
        assert_eq!(select_available(&balances, "ETH"), dec!(2));
    }

    #[test]
    fn test_absent_currency_is_zero() {
        let balances = vec![balance("ETH", Some("trade"), dec!(2))];
        assert_eq!(select_available(&balances, "DOGE"), Decimal::ZERO);
        assert_eq!(select_available(&[], "DOGE"), Decimal::ZERO);
    }
}
