//! 주문 처리를 위한 도메인 모델.

mod balance;
mod increment;
mod order;
mod symbol_rule;

pub use balance::*;
pub use increment::*;
pub use order::*;
pub use symbol_rule::*;
