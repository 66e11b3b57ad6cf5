use reqwest::Client;
use serde_json::Value;

use crate::api::error::ApiError;

/// Client for the upstream REST API.
///
/// No request timeout is configured; a hung request only ever stales its
/// own generation and cannot block the UI thread.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .build()
            .expect("failed to build HTTP client");
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a single GET and decode the JSON body. One attempt per call;
    /// retrying is the caller's decision (nobody here makes it).
    pub async fn get_json(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = upstream_message(response)
                .await
                .unwrap_or_else(|| status_fallback(status));
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }
}

/// Pull the `message` field out of an upstream error body, if it has one.
async fn upstream_message(response: reqwest::Response) -> Option<String> {
    let body = response.text().await.ok()?;
    let value: Value = serde_json::from_str(&body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn status_fallback(status: reqwest::StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
