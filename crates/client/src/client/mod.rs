//! HTTP client for the memora API.

pub mod changes;
pub mod items;
pub mod lists;

use memora_core::identity::Caller;
use memora_core::store::{Result, StoreError};

/// HTTP client for the memora API.
///
/// Implements the store contract ([`ListStore`](memora_core::store::ListStore)
/// and [`ItemStore`](memora_core::store::ItemStore)) against the hosted
/// backend. The caller identity is attached to each request by the client,
/// never by the caller: signed-in users as a bearer credential, anonymous
/// sessions through the session-token header, public viewers with no
/// credential at all.
#[derive(Debug, Clone)]
pub struct MemoraClient {
    client: reqwest::Client,
    base_url: String,
}

impl MemoraClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create from environment (MEMORA_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("MEMORA_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a request for an endpoint with the caller's credential attached.
    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        caller: &Caller,
    ) -> reqwest::RequestBuilder {
        with_credential(self.client.request(method, self.url(path)), caller)
    }

    /// Handle responses carrying an entity body.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        entity: &'static str,
        id: &str,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| StoreError::Malformed(e.to_string()))
        } else if status.as_u16() == 404 {
            Err(StoreError::not_found(entity, id))
        } else {
            Err(error_for(response).await)
        }
    }

    /// Handle delete responses (no body expected). A 404 is success: the row
    /// is gone either way, and racing a live delete is not an error.
    async fn handle_delete_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() || status.as_u16() == 404 {
            Ok(())
        } else {
            Err(error_for(response).await)
        }
    }
}

/// Attach the caller's credential to a request.
fn with_credential(builder: reqwest::RequestBuilder, caller: &Caller) -> reqwest::RequestBuilder {
    match caller {
        Caller::User(user_id) => builder.bearer_auth(user_id),
        Caller::Anonymous(token) => builder.header("X-Session-Token", token.as_str()),
        Caller::Public => builder,
    }
}

/// Map a transport failure.
fn network_error(error: reqwest::Error) -> StoreError {
    StoreError::Network(error.to_string())
}

/// Map a non-success, non-404 response to its error.
async fn error_for(response: reqwest::Response) -> StoreError {
    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    match status {
        401 | 403 => StoreError::AccessDenied(message),
        _ => {
            tracing::warn!(status, "unexpected server response");
            StoreError::Server { status, message }
        }
    }
}
