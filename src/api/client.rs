//! Generic credentialed request layer
//!
//! All traffic to the festival backend goes through [`ApiClient`]: a
//! cookie-carrying `reqwest` client with JSON bodies and uniform error
//! normalization. Non-2xx responses are decoded best-effort as
//! `{ "error": "..." }` and surfaced as [`AbhivyaktiError::Api`].
//!
//! No timeout is configured and nothing is retried; failure detection is
//! owned by the transport and a failed action is re-driven by the user.

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::settings::Settings;
use crate::utils::errors::{AbhivyaktiError, Result};

/// Which deployment base URL an endpoint belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// Auth, OTP, session-profile and event endpoints
    Api,
    /// User-data, payment and passes endpoints
    Backend,
}

/// Credentialed JSON client for the festival backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    api_base_url: String,
    backend_url: String,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .user_agent("Abhivyakti-Client/1.0")
            .build()
            .map_err(AbhivyaktiError::Http)?;

        Ok(Self {
            client,
            api_base_url: trim_trailing_slash(&settings.api.base_url),
            backend_url: trim_trailing_slash(&settings.api.backend_url),
        })
    }

    /// Base URL for a given endpoint family
    pub fn base_url(&self, base: Base) -> &str {
        match base {
            Base::Api => &self.api_base_url,
            Base::Backend => &self.backend_url,
        }
    }

    /// Absolute URL for the Google OAuth consent screen
    ///
    /// This is a browser redirect target, not a fetch call.
    pub fn google_oauth_url(&self) -> String {
        format!("{}/api/auth/google", self.api_base_url)
    }

    /// GET a JSON resource
    pub async fn get<T: DeserializeOwned>(&self, base: Base, endpoint: &str) -> Result<T> {
        self.request(Method::GET, base, endpoint, None::<&()>).await
    }

    /// POST a JSON body
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        base: Base,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::POST, base, endpoint, Some(body)).await
    }

    /// POST with no body (logout and friends)
    pub async fn post_empty<T: DeserializeOwned>(&self, base: Base, endpoint: &str) -> Result<T> {
        self.request(Method::POST, base, endpoint, None::<&()>).await
    }

    /// PUT a JSON body
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        base: Base,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::PUT, base, endpoint, Some(body)).await
    }

    /// Generic request helper; always sends the session cookie
    async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        base: Base,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url(base), endpoint);
        debug!(method = %method, url = %url, "Sending API request");

        let mut request = self
            .client
            .request(method, &url)
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        // The body is decoded best-effort either way; error responses are
        // normalized to the `error` field when present.
        let payload: Value = response.json().await.unwrap_or(Value::Null);

        if !status.is_success() {
            let message = extract_error_message(&payload);
            warn!(url = %url, status = %status, message = %message, "API request failed");
            return Err(AbhivyaktiError::api(status.as_u16(), message));
        }

        serde_json::from_value(payload).map_err(AbhivyaktiError::Serialization)
    }

    /// GET that maps 404 to `Ok(None)` instead of an error
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        base: Base,
        endpoint: &str,
    ) -> Result<Option<T>> {
        match self.get(base, endpoint).await {
            Ok(value) => Ok(Some(value)),
            Err(AbhivyaktiError::Api { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

fn trim_trailing_slash(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Pull a human-readable message out of a JSON error body
fn extract_error_message(payload: &Value) -> String {
    payload
        .get("error")
        .or_else(|| payload.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("Something went wrong")
        .to_string()
}
