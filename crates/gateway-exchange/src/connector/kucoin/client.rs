//! KuCoin REST 클라이언트.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Method, Request};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::auth::AuthHeaders;
use super::config::KucoinConfig;
use super::types::{envelope_code, SUCCESS_CODE};
use crate::{ExchangeApi, ExchangeError, ExchangeResult};

/// KuCoin REST 클라이언트.
///
/// 자격증명은 생성 시 주입되며 이후 읽기 전용입니다.
/// 내부 `reqwest::Client`는 커넥션 풀을 공유하므로 복제 비용이 낮습니다.
#[derive(Debug, Clone)]
pub struct KucoinClient {
    config: KucoinConfig,
    client: Client,
}

impl KucoinClient {
    /// 새 KuCoin 클라이언트 생성.
    pub fn new(config: KucoinConfig) -> Result<Self, ExchangeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ExchangeError::Transport(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { config, client })
    }

    /// 클라이언트 설정.
    pub fn config(&self) -> &KucoinConfig {
        &self.config
    }

    fn timestamp_ms() -> String {
        Utc::now().timestamp_millis().to_string()
    }

    /// 서명된 요청 생성.
    ///
    /// 본문은 한 번만 직렬화되며, 서명에 쓰인 문자열이 그대로 전송됩니다.
    fn signed_request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> ExchangeResult<Request> {
        let payload = body.map(Value::to_string).unwrap_or_default();

        let headers = AuthHeaders::build(
            &self.config.credentials,
            Self::timestamp_ms(),
            &method,
            path,
            &payload,
            &self.config.key_version,
        )
        .into_header_map()
        .map_err(|e| ExchangeError::Transport(format!("인증 헤더 생성 실패: {}", e)))?;

        let url = format!("{}{}", self.config.base_url, path);
        let mut builder = self.client.request(method, url).headers(headers);
        if body.is_some() {
            builder = builder.body(payload);
        }

        Ok(builder.build()?)
    }

    /// 응답 처리.
    ///
    /// - HTTP 4xx/5xx → `Api` (본문 그대로)
    /// - JSON이 아닌 본문 → `Parse`
    /// - 봉투 코드가 성공이 아님 → `Api`
    async fn handle_response(&self, response: reqwest::Response) -> ExchangeResult<Value> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_client_error() || status.is_server_error() {
            warn!("KuCoin 요청 실패 (HTTP {}): {}", status.as_u16(), body);
            return Err(ExchangeError::Api {
                status: status.as_u16(),
                payload: body,
            });
        }

        let value: Value = serde_json::from_str(&body).map_err(|e| ExchangeError::Parse {
            message: e.to_string(),
            body: body.clone(),
        })?;

        match envelope_code(&value) {
            Some(code) if code != SUCCESS_CODE => {
                warn!("KuCoin 에러 코드 {}: {}", code, body);
                Err(ExchangeError::Api {
                    status: status.as_u16(),
                    payload: body,
                })
            }
            _ => Ok(value),
        }
    }
}

#[async_trait]
impl ExchangeApi for KucoinClient {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> ExchangeResult<Value> {
        debug!("{} (signed) {}", method, path);

        let request = self.signed_request(method, path, body)?;
        let response = self.client.execute(request).await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::kucoin::auth::{
        sign, HEADER_KEY, HEADER_KEY_VERSION, HEADER_PASSPHRASE, HEADER_SIGN, HEADER_TIMESTAMP,
    };
    use gateway_core::Credentials;
    use mockito::Matcher;
    use serde_json::json;

    const SECRET: &str = "test-secret";

    fn client(base_url: &str) -> KucoinClient {
        let credentials = Credentials::new("api-key", SECRET, "test-passphrase").unwrap();
        KucoinClient::new(KucoinConfig::new(credentials).with_base_url(base_url)).unwrap()
    }

    #[test]
    fn test_signed_request_matches_sent_body() {
        let client = client("https://api.kucoin.com");
        let body = json!({"clientOid": "abc", "side": "buy", "symbol": "BTC-USDT"});

        let request = client
            .signed_request(Method::POST, "/api/v1/orders", Some(&body))
            .unwrap();

        let sent = std::str::from_utf8(request.body().unwrap().as_bytes().unwrap()).unwrap();
        let timestamp = request.headers()[HEADER_TIMESTAMP].to_str().unwrap();
        let expected = sign(timestamp, "POST", "/api/v1/orders", sent, SECRET);

        assert_eq!(sent, body.to_string());
        assert_eq!(request.headers()[HEADER_SIGN].to_str().unwrap(), expected);
        assert_eq!(request.url().as_str(), "https://api.kucoin.com/api/v1/orders");
    }

    #[test]
    fn test_signed_get_has_no_body() {
        let client = client("https://api.kucoin.com");
        let request = client
            .signed_request(Method::GET, "/api/v1/accounts", None)
            .unwrap();

        assert!(request.body().is_none());
        let timestamp = request.headers()[HEADER_TIMESTAMP].to_str().unwrap();
        let expected = sign(timestamp, "GET", "/api/v1/accounts", "", SECRET);
        assert_eq!(request.headers()[HEADER_SIGN].to_str().unwrap(), expected);
    }

    #[tokio::test]
    async fn test_get_sends_auth_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/accounts")
            .match_header(HEADER_KEY, "api-key")
            .match_header(HEADER_KEY_VERSION, "2")
            .match_header(
                HEADER_PASSPHRASE,
                "UbgWiL7WdjQOVBl1OLuMgUbTl9VlKFsjFbLedtCDPrY=",
            )
            .match_header(HEADER_SIGN, Matcher::Any)
            .match_header(HEADER_TIMESTAMP, Matcher::Regex(r"^\d{13}$".into()))
            .match_header("content-type", "application/json")
            .match_body("")
            .with_status(200)
            .with_body(r#"{"code":"200000","data":[]}"#)
            .create_async()
            .await;

        let value = client(&server.url())
            .execute(Method::GET, "/api/v1/accounts", None)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(value["code"], "200000");
    }

    #[tokio::test]
    async fn test_post_sends_exact_body() {
        let body = json!({"clientOid": "abc", "side": "sell", "symbol": "BTC-USDT", "type": "limit", "price": "30000", "size": "0.1"});

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/orders")
            .match_body(Matcher::Exact(body.to_string()))
            .with_status(200)
            .with_body(r#"{"code":"200000","data":{"orderId":"ord-1"}}"#)
            .expect(1)
            .create_async()
            .await;

        let value = client(&server.url())
            .execute(Method::POST, "/api/v1/orders", Some(&body))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(value["data"]["orderId"], "ord-1");
    }

    #[tokio::test]
    async fn test_error_status_returns_payload_verbatim() {
        let payload = r#"{"code":"400100","msg":"Order size below the minimum requirement."}"#;

        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/v1/orders")
            .with_status(400)
            .with_body(payload)
            .create_async()
            .await;

        let err = client(&server.url())
            .execute(Method::POST, "/api/v1/orders", Some(&json!({})))
            .await
            .unwrap_err();

        match err {
            ExchangeError::Api { status, payload: body } => {
                assert_eq!(status, 400);
                assert_eq!(body, payload);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_envelope_error_code_on_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/accounts")
            .with_status(200)
            .with_body(r#"{"code":"400003","msg":"KC-API-KEY not exists"}"#)
            .create_async()
            .await;

        let err = client(&server.url())
            .execute(Method::GET, "/api/v1/accounts", None)
            .await
            .unwrap_err();

        assert!(
            matches!(err, ExchangeError::Api { status: 200, ref payload } if payload.contains("400003"))
        );
    }

    #[tokio::test]
    async fn test_non_json_body_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v2/symbols")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let err = client(&server.url())
            .execute(Method::GET, "/api/v2/symbols", None)
            .await
            .unwrap_err();

        assert!(
            matches!(err, ExchangeError::Parse { ref body, .. } if body == "<html>maintenance</html>")
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let err = client("http://127.0.0.1:1")
            .execute(Method::GET, "/api/v1/accounts", None)
            .await
            .unwrap_err();

        assert!(matches!(err, ExchangeError::Transport(_)));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let debug = format!("{:?}", client("https://api.kucoin.com"));
        assert!(!debug.contains(SECRET));
        assert!(!debug.contains("test-passphrase"));
    }
}
