//! KuCoin 클라이언트 설정.

use gateway_core::{Credentials, ExchangeConfig};
use std::fmt;
use std::sync::Arc;

/// 메인넷 REST URL
pub const MAINNET_URL: &str = "https://api.kucoin.com";
/// 샌드박스 REST URL
pub const SANDBOX_URL: &str = "https://openapi-sandbox.kucoin.com";

/// KuCoin 클라이언트 설정.
///
/// # 보안
/// - `Debug` 구현은 자격증명을 출력하지 않습니다.
#[derive(Clone)]
pub struct KucoinConfig {
    /// API 자격증명 (프로세스 전역, 읽기 전용)
    pub credentials: Arc<Credentials>,
    /// REST API 기본 URL
    pub base_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
    /// KC-API-KEY-VERSION 값
    pub key_version: String,
}

impl fmt::Debug for KucoinConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KucoinConfig")
            .field("credentials", &"***REDACTED***")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("key_version", &self.key_version)
            .finish()
    }
}

impl KucoinConfig {
    /// 메인넷 기본값으로 새 설정 생성.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials: Arc::new(credentials),
            base_url: MAINNET_URL.to_string(),
            timeout_secs: 10,
            key_version: "2".to_string(),
        }
    }

    /// 애플리케이션 설정의 거래소 섹션에서 생성.
    pub fn from_settings(credentials: Credentials, settings: &ExchangeConfig) -> Self {
        Self::new(credentials)
            .with_base_url(settings.base_url.clone())
            .with_timeout_secs(settings.timeout_secs)
            .with_key_version(settings.key_version.clone())
    }

    /// 기본 URL 지정 (끝의 `/`는 제거).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// 샌드박스 사용.
    pub fn with_sandbox(self, sandbox: bool) -> Self {
        if sandbox {
            self.with_base_url(SANDBOX_URL)
        } else {
            self.with_base_url(MAINNET_URL)
        }
    }

    /// 요청 타임아웃 지정.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// 키 버전 지정.
    pub fn with_key_version(mut self, key_version: impl Into<String>) -> Self {
        self.key_version = key_version.into();
        self
    }
}
