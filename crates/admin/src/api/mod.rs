//! Remote data service client.
//!
//! The sole component permitted to perform network I/O: a stateless REST
//! wrapper over the configured base address. Operations map one-to-one to
//! HTTP verbs on the `businesses`, `staff`, and `users` collections. The
//! client performs no retry, no backoff, and no caching; every failure is
//! passed through to the caller as an [`ApiError`].

mod businesses;
mod staff;
mod users;

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Errors that can occur when talking to the remote data service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request itself failed (connection refused, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The response body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Client for the remote data service.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: base_url.trim_end_matches('/').to_owned(),
            }),
        })
    }

    /// The configured base address, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Check that the remote service is reachable.
    ///
    /// Used by the readiness probe.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable or answers non-2xx.
    pub async fn ping(&self) -> Result<(), ApiError> {
        let response = self.inner.client.get(self.base_url()).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Api {
                status: status.as_u16(),
                message: "readiness probe failed".to_owned(),
            })
        }
    }

    /// Execute a GET request against a collection path.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url());
        let response = self.inner.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Execute a GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url());
        let response = self.inner.client.get(&url).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Execute a POST request with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url());
        let response = self.inner.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Execute a PUT request with a JSON body.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url());
        let response = self.inner.client.put(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Execute a DELETE request, discarding any response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = format!("{}{path}", self.base_url());
        let response = self.inner.client.delete(&url).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path.to_owned()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    /// Map a response to a decoded body or an [`ApiError`].
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(response.url().path().to_owned()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(format!("{e}")))
    }
}
