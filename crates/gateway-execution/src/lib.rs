//! 주문 검증, 정규화 및 제출.
//!
//! 이 crate는 다음을 제공합니다:
//! - 필수 필드 검증
//! - 거래 규칙 기반 가격/수량 정규화
//! - 주문 전 잔고 검사
//! - 고유 clientOid 생성 후 단일 주문 제출
//!
//! # 예제
//!
//! ```rust,ignore
//! use gateway_core::{OrderType, Side};
//! use gateway_execution::OrderBuilder;
//! use rust_decimal_macros::dec;
//!
//! let builder = OrderBuilder::new(exchange);
//! let result = builder
//!     .build_and_submit("BTC-USDT", Side::Buy, Some(dec!(30000.126)), Some(dec!(0.00005)), OrderType::Limit)
//!     .await?;
//! ```

pub mod order_builder;

pub use order_builder::{normalize, NormalizedOrder, OrderBuilder};
