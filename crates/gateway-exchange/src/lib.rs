//! 거래소 연결 및 거래 규칙/잔고 조회.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - ExchangeApi trait: 인증된 단일 요청 인터페이스
//! - KuCoin 커넥터 (요청 서명 + REST 호출)
//! - 심볼 거래 규칙 조회 (SymbolRules)
//! - 잔고 조회 및 충분성 검사 (BalanceChecker)

pub mod connector;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod provider;
pub mod traits;

pub use connector::kucoin::{KucoinClient, KucoinConfig};
pub use error::*;
pub use provider::{BalanceChecker, SymbolRules};
pub use traits::*;
