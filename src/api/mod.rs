//! REST API Client
//!
//! One async function per backend operation, organized by domain. Every
//! call goes through the same plumbing: headers are rebuilt from the
//! session at call time, non-2xx responses become `ApiError::Server`
//! carrying the `detail` message, success bodies are parsed into the
//! declared shape.

mod auth;
mod comments;
mod organizations;
mod projects;
mod subtasks;
mod tasks;
mod users;


use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub use adept_router::encode_component;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::session::SessionStore;

/// Append `key=value` pairs, skipping unset values
pub(crate) fn with_query(path: String, params: &[(&str, Option<&str>)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, encode_component(v))))
        .collect();
    if query.is_empty() {
        path
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}

/// Headers for an authenticated JSON request.
/// `Authorization` is present if and only if a token is given.
pub fn build_headers(token: Option<&str>) -> ApiResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        let bearer = format!("Bearer {}", token);
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&bearer)?);
    }
    Ok(headers)
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// `detail` from an error body, when it is a plain string
fn detail_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.is_empty() => Some(detail),
        _ => None,
    }
}

/// Typed client for the project-management backend
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: Arc<dyn SessionStore>) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url,
            session,
        }
    }

    /// Client wired from the environment with the target's default session store
    pub fn from_env() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        let session = crate::session::default_session(&config);
        Ok(Self::new(config, session))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start an authenticated request; the token is read now, never cached
    fn request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let headers = build_headers(self.session.token().as_deref())?;
        log::debug!("[API] {} {}", method, path);
        Ok(self.http.request(method, self.url(path)).headers(headers))
    }

    /// Request without the session header (login only)
    fn anonymous(&self, method: Method, path: &str) -> RequestBuilder {
        log::debug!("[API] {} {} (anonymous)", method, path);
        self.http.request(method, self.url(path))
    }

    /// Send and turn a non-2xx status into `ApiError::Server`
    async fn execute(&self, request: RequestBuilder, fallback: &str) -> ApiResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = detail_message(&body).unwrap_or_else(|| fallback.to_string());
        log::warn!("[API] {} -> {}: {}", fallback, status.as_u16(), message);
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> ApiResult<T> {
        let response = self.execute(request, fallback).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_text(&self, request: RequestBuilder, fallback: &str) -> ApiResult<String> {
        let response = self.execute(request, fallback).await?;
        Ok(response.text().await?)
    }

    async fn fetch_empty(&self, request: RequestBuilder, fallback: &str) -> ApiResult<()> {
        self.execute(request, fallback).await?;
        Ok(())
    }
}
