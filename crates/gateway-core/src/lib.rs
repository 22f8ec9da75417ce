//! # Gateway Core
//!
//! KuCoin 게이트웨이의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 게이트웨이 전반에서 사용되는 기본 타입을 제공합니다:
//! - 주문 요청/결과 타입
//! - 심볼 거래 규칙 및 잔고
//! - 호가/수량 단위 정규화
//! - API 자격증명
//! - 에러 분류 체계
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod credentials;
pub mod domain;
pub mod error;
pub mod logging;

pub use config::*;
pub use credentials::{Credentials, CredentialsError};
pub use domain::*;
pub use error::*;
pub use logging::*;
