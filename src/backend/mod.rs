//! Hosted backend API client — endpoint URLs, auth headers, JSON transport.
//!
//! DESIGN
//! ======
//! Every domain service goes through this one thin client. The platform
//! exposes three surfaces: a PostgREST-style data API (`/rest/v1`), the
//! auth API (`/auth/v1`), and deployed edge functions (`/functions/v1`).
//! Requests always carry the publishable anon key; row-level security is
//! enforced server-side from the bearer token, which is the user's session
//! token when one exists and the anon key otherwise.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::config::BackendConfig;

/// `Prefer` header value asking the data API to echo mutated rows back.
pub const PREFER_REPRESENTATION: &str = "return=representation";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Shared HTTP client for the hosted platform.
pub struct ApiClient {
    http: reqwest::Client,
    config: BackendConfig,
}

impl ApiClient {
    pub fn new(config: BackendConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Data API endpoint for a table, e.g. `…/rest/v1/projects`.
    #[must_use]
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.config.base_url)
    }

    /// Auth API endpoint, e.g. `…/auth/v1/token`.
    #[must_use]
    pub fn auth_url(&self, op: &str) -> String {
        format!("{}/auth/v1/{op}", self.config.base_url)
    }

    /// Edge function endpoint, e.g. `…/functions/v1/send-confirmation`.
    #[must_use]
    pub fn function_url(&self, name: &str) -> String {
        format!("{}/functions/v1/{name}", self.config.base_url)
    }

    /// Start a request with platform auth headers applied. `access_token`
    /// is the signed-in user's session token; anonymous requests fall back
    /// to the anon key as bearer.
    #[must_use]
    pub fn request(&self, method: Method, url: &str, access_token: Option<&str>) -> reqwest::RequestBuilder {
        let bearer = access_token.unwrap_or(&self.config.anon_key);
        self.http
            .request(method, url)
            .header("apikey", &self.config.anon_key)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {bearer}"))
    }
}

/// Send a request and decode a JSON body, mapping non-2xx statuses to
/// [`ApiError::Status`] with the raw body preserved for the caller's notice.
pub async fn send_json<T: DeserializeOwned>(builder: reqwest::RequestBuilder) -> Result<T, ApiError> {
    let body = send_text(builder).await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send a request, succeeding on any 2xx and discarding the body.
pub async fn send_no_content(builder: reqwest::RequestBuilder) -> Result<(), ApiError> {
    send_text(builder).await.map(|_| ())
}

async fn send_text(builder: reqwest::RequestBuilder) -> Result<String, ApiError> {
    let resp = builder
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !status.is_success() {
        return Err(ApiError::Status { status: status.as_u16(), body });
    }
    Ok(body)
}
