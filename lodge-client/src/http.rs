//! HTTP client for network-based API calls

use crate::{ApiError, ApiResult, ClientConfig};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// Error body shape the backend uses for non-2xx responses.
/// Best-effort: the field is optional and the body may not be JSON
/// at all.
#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Generic request executor for the hotel management API
///
/// Performs exactly one network call per invocation and normalizes
/// every failure mode into [`ApiError`]. No retries, no caching, no
/// request deduplication.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "sending API request");
        self.client.request(method, url)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.request(Method::GET, path).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.request(Method::POST, path).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request. The response body carries no data;
    /// only the status is inspected.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_response(response).await);
        }
        response.json().await.map_err(Into::into)
    }

    /// Normalize a non-success response into an [`ApiError`].
    ///
    /// The body is decoded as JSON to extract a `message` field; when
    /// that fails, or the message is empty, the message falls back to
    /// the numeric status plus the status text.
    async fn error_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message.filter(|message| !message.is_empty()))
            .unwrap_or_else(|| {
                format!(
                    "API error: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )
            });
        tracing::warn!(status = status.as_u16(), %message, "API request failed");
        ApiError::new(message, status.as_u16())
    }
}
