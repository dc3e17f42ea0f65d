//! HTTP client for the DataUSA API.

use bytes::Bytes;
use countypop_types::CountyRecord;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::{DecodeError, decode_records};

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retry attempts for failed requests.
    pub max_retries: u32,
    /// Base delay for exponential backoff (in milliseconds).
    pub base_delay_ms: u64,
    /// Maximum delay between retries (in milliseconds).
    pub max_delay_ms: u64,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_retries: 3,
            base_delay_ms: 500,
            max_delay_ms: 10_000,
            user_agent: format!("countypop/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while loading records.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status.
    #[error("Server error: {status}")]
    ServerError {
        /// HTTP status code.
        status: u16,
    },

    /// The payload could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP client with retry logic.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    config: ClientConfig,
}

impl FetchClient {
    /// Creates a new fetch client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Performs a GET against `url`, returning the response body.
    ///
    /// Server errors (5xx), rate limiting (429) and transient connection
    /// failures are retried with exponential backoff.
    ///
    /// # Errors
    ///
    /// Returns an error on a non-retryable status or once retries run out.
    pub async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        let mut attempts = 0;

        loop {
            tracing::debug!(url, attempt = attempts + 1, "requesting county data");
            match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if (status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS)
                        && attempts < self.config.max_retries
                    {
                        attempts += 1;
                        let delay = self.calculate_backoff_delay(attempts);
                        tracing::warn!(%status, attempts, ?delay, "retrying request");
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    if !status.is_success() {
                        return Err(FetchError::ServerError {
                            status: status.as_u16(),
                        });
                    }

                    return Ok(response.bytes().await?);
                }
                Err(e) if self.is_retryable_error(&e) && attempts < self.config.max_retries => {
                    attempts += 1;
                    let delay = self.calculate_backoff_delay(attempts);
                    tracing::warn!(error = %e, attempts, ?delay, "retrying request");
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Fetches and decodes the county records served at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not decode.
    pub async fn fetch_records(&self, url: &str) -> Result<Vec<CountyRecord>, FetchError> {
        let body = self.fetch(url).await?;
        let records = decode_records(&body)?;
        tracing::info!(count = records.len(), bytes = body.len(), "loaded county records");
        Ok(records)
    }

    /// Calculates the backoff delay with exponential backoff and jitter.
    fn calculate_backoff_delay(&self, attempt: u32) -> Duration {
        let exp_delay = self
            .config
            .base_delay_ms
            .saturating_mul(1u64 << attempt.min(10));

        let capped_delay = exp_delay.min(self.config.max_delay_ms);

        // Deterministic jitter (±25%) derived from the attempt number
        let jitter_range = capped_delay / 4;
        let jitter = if jitter_range > 0 {
            let jitter_offset = (u64::from(attempt) * 17) % (jitter_range * 2);
            jitter_offset as i64 - jitter_range as i64
        } else {
            0
        };

        let final_delay = (capped_delay as i64 + jitter).max(100) as u64;
        Duration::from_millis(final_delay)
    }

    /// Determines if an error is retryable.
    fn is_retryable_error(&self, error: &reqwest::Error) -> bool {
        if error.is_builder() {
            return false;
        }
        error.is_timeout() || error.is_connect() || error.is_request()
    }
}
