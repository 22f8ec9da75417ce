//! 거래소 커넥터.

pub mod kucoin;

pub use kucoin::*;
