//! ExchangeApi 기반 조회 제공자.
//!
//! 주문 전 단계에서 필요한 거래 규칙과 잔고를 거래소 중립적인 도메인 타입으로 제공합니다.

mod balance;
mod symbol_rules;

pub use balance::BalanceChecker;
pub use symbol_rules::SymbolRules;
