//! HTTP client for the summarization service.
//!
//! Uses reqwest to post the article URL and serde_json to decode the reply.

use crate::config::Config;
use crate::summary::{SummaryRequest, SummaryResponse};
use reqwest::{Client, StatusCode};
use thiserror::Error;

/// User-Agent string identifying this client
const USER_AGENT: &str = concat!("summa-braille/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("failed to reach summarization service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("summarization service responded with {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the one `POST /summarize` exchange.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SummaryService {
    client: Client,
    endpoint: String,
}

impl SummaryService {
    /// Create a service client for the given endpoint with transport defaults
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ServiceError> {
        Ok(Self {
            client: Client::builder().user_agent(USER_AGENT).build()?,
            endpoint: endpoint.into(),
        })
    }

    /// Create a service client from the loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, ServiceError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.service.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post `url` to the service and decode the summary fields
    pub async fn summarize(&self, url: &str) -> Result<SummaryResponse, ServiceError> {
        let request = SummaryRequest {
            url: url.to_string(),
        };

        tracing::info!(endpoint = %self.endpoint, "requesting summary");
        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
