//! # API 자격증명
//!
//! KuCoin API 키, 시크릿, 패스프레이즈를 보관합니다.
//!
//! ## 보안 고려사항
//! - 세 값 모두 `SecretString`으로 보관되어 `Debug` 출력 시 마스킹됨
//! - 하나라도 누락되거나 비어 있으면 생성 자체가 실패 (fail closed)
//! - 프로세스 시작 시 한 번 로드되며 이후 변경되지 않음

use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use thiserror::Error;

/// API 키 환경변수 이름
pub const ENV_API_KEY: &str = "KUCOIN_API_KEY";
/// API 시크릿 환경변수 이름
pub const ENV_API_SECRET: &str = "KUCOIN_API_SECRET";
/// API 패스프레이즈 환경변수 이름
pub const ENV_API_PASSPHRASE: &str = "KUCOIN_API_PASSPHRASE";

/// 자격증명 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Credential not configured: {0}")]
    Missing(&'static str),
}

/// 거래소 API 자격증명.
///
/// 인증이 필요한 모든 호출은 이 값을 통해서만 시크릿에 접근합니다.
pub struct Credentials {
    key: SecretString,
    secret: SecretString,
    passphrase: SecretString,
}

impl Credentials {
    /// 세 값으로 자격증명 생성.
    ///
    /// # Errors
    /// 빈 문자열이 하나라도 있으면 `CredentialsError::Missing`을 반환합니다.
    pub fn new(
        key: impl Into<String>,
        secret: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let key = non_empty(key.into(), ENV_API_KEY)?;
        let secret = non_empty(secret.into(), ENV_API_SECRET)?;
        let passphrase = non_empty(passphrase.into(), ENV_API_PASSPHRASE)?;

        Ok(Self {
            key: SecretString::from(key),
            secret: SecretString::from(secret),
            passphrase: SecretString::from(passphrase),
        })
    }

    /// 환경 변수에서 생성.
    pub fn from_env() -> Result<Self, CredentialsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 임의의 조회 함수로 생성 (테스트에서 환경을 주입할 때 사용).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CredentialsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = lookup(ENV_API_KEY).ok_or(CredentialsError::Missing(ENV_API_KEY))?;
        let secret = lookup(ENV_API_SECRET).ok_or(CredentialsError::Missing(ENV_API_SECRET))?;
        let passphrase =
            lookup(ENV_API_PASSPHRASE).ok_or(CredentialsError::Missing(ENV_API_PASSPHRASE))?;

        Self::new(key, secret, passphrase)
    }

    /// API 키
    pub fn key(&self) -> &str {
        self.key.expose_secret()
    }

    /// API 시크릿 (서명 키)
    pub fn secret(&self) -> &str {
        self.secret.expose_secret()
    }

    /// 인코딩 전 패스프레이즈
    pub fn passphrase(&self) -> &str {
        self.passphrase.expose_secret()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &"***REDACTED***")
            .field("secret", &"***REDACTED***")
            .field("passphrase", &"***REDACTED***")
            .finish()
    }
}

fn non_empty(value: String, name: &'static str) -> Result<String, CredentialsError> {
    if value.trim().is_empty() {
        Err(CredentialsError::Missing(name))
    } else {
        Ok(value)
    }
}
