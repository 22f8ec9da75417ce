//! KuCoin 주문 게이트웨이 REST API.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Axum 기반 REST API (잔고 조회, 매수/매도)
//! - 게이트웨이 에러 → HTTP 상태 코드 매핑
//! - 헬스 체크 엔드포인트
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: REST API 엔드포인트
//! - [`error`]: 통합 에러 응답

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiErrorResponse, ApiResult};
pub use routes::*;
pub use state::{deadline_for, AppState};

#[cfg(any(test, feature = "test-utils"))]
pub use state::create_test_state;
