//! HTTP client with automatic retry
//!
//! A thin wrapper over a pooled [`reqwest::Client`]: JSON GET requests with
//! exponential backoff on transient failures (connect errors, timeouts,
//! 5xx and 429 responses). Client errors and undecodable bodies fail
//! immediately.

use crate::retry::RetryPolicy;
use backoff::future::retry_notify;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection establishment timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP transport error types
#[derive(Debug, Error)]
pub enum HttpError {
    /// Client construction failed
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    /// Request could not be delivered
    #[error("Request failed: {0}")]
    Transport(String),

    /// Service responded with a non-success status
    #[error("Service responded with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Response body could not be decoded
    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

/// Result type for HTTP operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// Whether a response status warrants a retry
pub fn is_retryable_status(status: u16) -> bool {
    status >= 500 || status == StatusCode::TOO_MANY_REQUESTS.as_u16()
}

fn classify_transport(error: reqwest::Error) -> backoff::Error<HttpError> {
    let retryable = error.is_timeout() || error.is_connect();
    let mapped = HttpError::Transport(error.to_string());
    if retryable {
        backoff::Error::transient(mapped)
    } else {
        backoff::Error::permanent(mapped)
    }
}

/// Pooled HTTP client with retry on transient failure
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    policy: RetryPolicy,
}

impl HttpClient {
    /// Create a client with the default retry policy
    pub fn new() -> Result<Self> {
        Self::with_policy(RetryPolicy::default())
    }

    /// Create a client with a custom retry policy
    pub fn with_policy(policy: RetryPolicy) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        Ok(Self { inner, policy })
    }

    /// Issue a GET request and decode the JSON response body
    ///
    /// Transient failures are retried per the client's policy; the final
    /// error is returned once the policy is exhausted.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let operation = || async {
            tracing::debug!(url, "issuing GET request");
            let response = self
                .inner
                .get(url)
                .send()
                .await
                .map_err(classify_transport)?;

            let status = response.status();
            if !status.is_success() {
                let error = HttpError::Status {
                    status: status.as_u16(),
                };
                return if is_retryable_status(status.as_u16()) {
                    Err(backoff::Error::transient(error))
                } else {
                    Err(backoff::Error::permanent(error))
                };
            }

            response
                .json::<T>()
                .await
                .map_err(|e| backoff::Error::permanent(HttpError::Decode(e.to_string())))
        };

        retry_notify(self.policy.backoff(), operation, |error, delay| {
            tracing::warn!(%error, ?delay, url, "retrying request");
        })
        .await
    }
}
