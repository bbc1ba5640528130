use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

use crate::api::models::{ItemsResponse, SessionUser, Stats, TodayResponse, VocabItem};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response; the message is extracted from the body.
    #[error("{0}")]
    Server(String),
    /// Transport-level failure (connect, timeout, body decode).
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Blocking HTTP client for the vocabulary backend. Carries a cookie store
/// so the session cookie set by `/signin` rides along on every later call.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .cookie_store(true)
            .build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> ApiResult<T> {
        let resp = check(req.send()?)?;
        Ok(resp.json()?)
    }

    fn send_text(&self, req: RequestBuilder) -> ApiResult<String> {
        let resp = check(req.send()?)?;
        Ok(resp.text()?)
    }

    pub fn me(&self) -> ApiResult<SessionUser> {
        self.send_json(self.http.get(self.url("/me")))
    }

    pub fn sign_up(&self, email: &str, password: &str) -> ApiResult<SessionUser> {
        self.send_json(
            self.http
                .post(self.url("/signup"))
                .json(&json!({ "email": email, "password": password })),
        )
    }

    pub fn sign_in(&self, email: &str, password: &str) -> ApiResult<SessionUser> {
        self.send_json(
            self.http
                .post(self.url("/signin"))
                .json(&json!({ "email": email, "password": password })),
        )
    }

    /// POST first; older deployments only accept GET, so retry once.
    pub fn logout(&self) -> ApiResult<()> {
        if self.send_text(self.http.post(self.url("/logout"))).is_ok() {
            return Ok(());
        }
        self.send_text(self.http.get(self.url("/logout"))).map(|_| ())
    }

    pub fn vocab_list(&self) -> ApiResult<Vec<VocabItem>> {
        let resp: ItemsResponse = self.send_json(self.http.get(self.url("/vocab/list")))?;
        Ok(resp.items)
    }

    pub fn vocab_random(&self) -> ApiResult<Option<VocabItem>> {
        let resp: ItemsResponse = self.send_json(
            self.http.get(self.url("/vocab/random")).query(&[("limit", "1")]),
        )?;
        Ok(resp.items.into_iter().next())
    }

    /// Create or return today's word. With `force` false an existing
    /// assignment for today is returned unchanged.
    pub fn today_auto(&self, force: bool) -> ApiResult<VocabItem> {
        let resp: TodayResponse = self.send_json(
            self.http
                .post(self.url("/vocab/today/auto"))
                .json(&json!({ "force": force })),
        )?;
        Ok(resp.item)
    }

    pub fn reset(&self) -> ApiResult<()> {
        self.send_text(self.http.post(self.url("/vocab/reset")).json(&json!({})))
            .map(|_| ())
    }

    pub fn stats(&self) -> ApiResult<Stats> {
        self.send_json(self.http.get(self.url("/stats")))
    }

    /// `/export` replies with plain-text markdown, not JSON.
    pub fn export_markdown(&self) -> ApiResult<String> {
        self.send_text(self.http.get(self.url("/export")))
    }

    /// Google OAuth entry point; plain navigation, opened in a browser.
    pub fn google_login_url(&self) -> String {
        self.url("/auth/google/login")
    }
}

/// Pass a success response through, or turn anything else into
/// `ApiError::Server` with the best message the body offers.
fn check(resp: Response) -> ApiResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    Err(ApiError::Server(detail_message(status, &body)))
}

/// Extract a display message from an error response: the JSON `detail`
/// field when the body is JSON, else the raw body, else the status line.
fn detail_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        match value.get("detail") {
            Some(serde_json::Value::String(s)) if !s.is_empty() => return s.clone(),
            Some(serde_json::Value::Null) | None => {}
            Some(other) => return other.to_string(),
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    format!(
        "request failed: {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("unknown status")
    )
}
