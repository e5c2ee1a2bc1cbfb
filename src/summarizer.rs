//! The summarizer client: validates input, issues one request per action and
//! maps the outcome onto [`SummaryState`].

use crate::service::{ServiceError, SummaryService};
use crate::summary::{SummaryResponse, SummaryState};

/// A validated request that still has to be sent.
///
/// `id` increases with every invocation, rejected ones included; only the
/// outcome for the most recent id is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: u64,
    pub url: String,
}

/// Owns the session state and the service client.
#[derive(Debug, Clone)]
pub struct Summarizer {
    service: SummaryService,
    state: SummaryState,
    latest_request: u64,
}

impl Summarizer {
    pub fn new(service: SummaryService) -> Self {
        Self {
            service,
            state: SummaryState::default(),
            latest_request: 0,
        }
    }

    pub fn service(&self) -> &SummaryService {
        &self.service
    }

    pub fn state(&self) -> &SummaryState {
        &self.state
    }

    /// Replace the URL input
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.state.url = url.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.state.url.push(c);
    }

    pub fn pop_char(&mut self) {
        self.state.url.pop();
    }

    /// Clear previous output and validate the input.
    ///
    /// Returns the request to send, or `None` after recording the validation
    /// error. Either way every earlier request becomes stale.
    pub fn begin(&mut self) -> Option<PendingRequest> {
        self.latest_request += 1;
        self.state.clear();

        if self.state.url_is_blank() {
            self.state.reject_empty_url();
            return None;
        }

        Some(PendingRequest {
            id: self.latest_request,
            url: self.state.url.clone(),
        })
    }

    /// Apply the outcome of request `id`.
    ///
    /// Returns `false` and leaves state untouched when `begin` has been
    /// called again since.
    pub fn finish(&mut self, id: u64, outcome: Result<SummaryResponse, ServiceError>) -> bool {
        if id != self.latest_request {
            tracing::debug!(id, latest = self.latest_request, "dropping stale response");
            return false;
        }

        match outcome {
            Ok(response) => {
                tracing::info!(id, "summary received");
                self.state.apply_response(response);
            }
            Err(e) => {
                tracing::debug!(id, error = %e, "summary request failed");
                self.state.apply_failure();
            }
        }
        true
    }

    /// Run one complete summarize action
    pub async fn summarize(&mut self) {
        let Some(request) = self.begin() else {
            return;
        };

        let outcome = self.service.summarize(&request.url).await;
        self.finish(request.id, outcome);
    }
}
