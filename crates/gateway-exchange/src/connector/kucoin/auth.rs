//! KuCoin 요청 서명.
//!
//! 서명과 패스프레이즈 인코딩은 모두 같은 시크릿을 키로 한
//! HMAC-SHA256 → Base64 변환입니다. 부수 효과가 없는 순수 함수입니다.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use gateway_core::Credentials;
use hmac::{Hmac, Mac};
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, CONTENT_TYPE};
use reqwest::Method;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const HEADER_KEY: &str = "KC-API-KEY";
pub const HEADER_SIGN: &str = "KC-API-SIGN";
pub const HEADER_TIMESTAMP: &str = "KC-API-TIMESTAMP";
pub const HEADER_PASSPHRASE: &str = "KC-API-PASSPHRASE";
pub const HEADER_KEY_VERSION: &str = "KC-API-KEY-VERSION";

fn hmac_base64(secret: &str, parts: &[&str]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    for part in parts {
        mac.update(part.as_bytes());
    }
    STANDARD.encode(mac.finalize().into_bytes())
}

/// 요청 서명 생성.
///
/// 메시지는 `timestamp + method + path + body`이며, `body`는 실제로 전송되는
/// 문자열과 바이트 단위로 같아야 합니다. GET 요청은 빈 문자열을 사용합니다.
///
/// # Arguments
/// * `timestamp` - 밀리초 Unix 타임스탬프 문자열
/// * `method` - 대문자 HTTP 메서드 (예: "GET")
/// * `path` - 선행 `/`와 쿼리 문자열을 포함한 경로
/// * `body` - 직렬화된 요청 본문
/// * `secret` - API 시크릿
pub fn sign(timestamp: &str, method: &str, path: &str, body: &str, secret: &str) -> String {
    hmac_base64(secret, &[timestamp, method, path, body])
}

/// 키 버전 2용 패스프레이즈 인코딩.
pub fn encode_passphrase(passphrase: &str, secret: &str) -> String {
    hmac_base64(secret, &[passphrase])
}

/// 한 요청에 대한 인증 헤더 묶음.
///
/// 타임스탬프 헤더와 서명에 쓰인 타임스탬프가 항상 같도록 한 번에 생성합니다.
pub struct AuthHeaders {
    key: String,
    signature: String,
    timestamp: String,
    passphrase: String,
    key_version: String,
}

impl AuthHeaders {
    /// 인증 헤더 생성.
    pub fn build(
        credentials: &Credentials,
        timestamp: String,
        method: &Method,
        path: &str,
        body: &str,
        key_version: &str,
    ) -> Self {
        let signature = sign(&timestamp, method.as_str(), path, body, credentials.secret());
        let passphrase = encode_passphrase(credentials.passphrase(), credentials.secret());

        Self {
            key: credentials.key().to_string(),
            signature,
            timestamp,
            passphrase,
            key_version: key_version.to_string(),
        }
    }

    /// 서명에 사용된 타임스탬프.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// 서명 값.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// reqwest 헤더 맵으로 변환.
    ///
    /// # Errors
    /// 키에 헤더로 쓸 수 없는 문자가 있으면 `InvalidHeaderValue`를 반환합니다.
    pub fn into_header_map(self) -> Result<HeaderMap, InvalidHeaderValue> {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_KEY, HeaderValue::from_str(&self.key)?);
        headers.insert(HEADER_SIGN, HeaderValue::from_str(&self.signature)?);
        headers.insert(HEADER_TIMESTAMP, HeaderValue::from_str(&self.timestamp)?);
        headers.insert(HEADER_PASSPHRASE, HeaderValue::from_str(&self.passphrase)?);
        headers.insert(HEADER_KEY_VERSION, HeaderValue::from_str(&self.key_version)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}
