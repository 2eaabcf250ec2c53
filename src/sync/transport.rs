use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::sync::OnceLock;

/// Plain-text content type keeps browsers from sending a CORS preflight,
/// which the Apps Script backend does not answer.
pub const PLAIN_TEXT: &str = "text/plain;charset=utf-8";

/// One request/response exchange with the remote endpoint.
pub trait Transport {
    fn post_json(&self, url: &str, body: &Value) -> AppResult<Value>;
}

/// Blocking HTTP transport. The client is built on the first request, so
/// offline runs never touch the TLS stack and a build failure surfaces as a
/// request error.
#[derive(Default)]
pub struct HttpTransport {
    client: OnceLock<Result<Client, String>>,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a request has been attempted.
    pub fn is_initialized(&self) -> bool {
        self.client.get().is_some()
    }

    fn client(&self) -> AppResult<&Client> {
        self.client
            .get_or_init(|| {
                Client::builder()
                    .user_agent(concat!("guruhadir/", env!("CARGO_PKG_VERSION")))
                    .build()
                    .map_err(|e| e.to_string())
            })
            .as_ref()
            .map_err(|e| AppError::Other(format!("HTTP client unavailable: {e}")))
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, body: &Value) -> AppResult<Value> {
        let client = self.client()?;
        let payload = serde_json::to_string(body)?;
        tracing::debug!(url, bytes = payload.len(), "POST");

        let resp = client
            .post(url)
            .header(CONTENT_TYPE, PLAIN_TEXT)
            .body(payload)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default().to_string(),
            ));
        }

        let text = resp.text()?;
        Ok(serde_json::from_str(&text)?)
    }
}
