//! KuCoin 거래소 연동 모듈.
//!
//! # 인증
//!
//! 모든 비공개 요청은 다음 헤더를 포함합니다:
//! - `KC-API-KEY`: API 키
//! - `KC-API-SIGN`: Base64(HMAC-SHA256(secret, timestamp + METHOD + path + body))
//! - `KC-API-TIMESTAMP`: 밀리초 Unix 타임스탬프
//! - `KC-API-PASSPHRASE`: Base64(HMAC-SHA256(secret, passphrase))
//! - `KC-API-KEY-VERSION`: "2"
//!
//! # API 문서
//!
//! 공식 API 문서: <https://www.kucoin.com/docs/basic-info/connection-method/authentication/signing-a-message>
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use gateway_core::Credentials;
//! use gateway_exchange::connector::kucoin::{KucoinClient, KucoinConfig};
//! use gateway_exchange::ExchangeApi;
//!
//! let credentials = Credentials::from_env()?;
//! let client = KucoinClient::new(KucoinConfig::new(credentials))?;
//! let accounts = client.execute(reqwest::Method::GET, "/api/v1/accounts", None).await?;
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod types;

pub use auth::{encode_passphrase, sign, AuthHeaders};
pub use client::KucoinClient;
pub use config::KucoinConfig;
pub use types::{
    KucoinAccount, KucoinOrderAck, KucoinOrderBody, KucoinSymbol, ACCOUNTS_PATH, ORDERS_PATH,
    SYMBOLS_PATH,
};
