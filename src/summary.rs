//! Summary types - the wire exchange with the summarization service and the
//! state the client renders from.

use serde::{Deserialize, Serialize};

/// Shown when the URL input is empty.
pub const EMPTY_URL_MESSAGE: &str = "Please enter a valid article URL.";

/// Shown for every request failure, whatever the cause.
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to fetch summary. Please try again.";

/// Request body posted to the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryRequest {
    pub url: String,
}

/// Response body from the service.
///
/// Every field is optional: a missing or `null` field is rendered as empty
/// rather than rejected. Unknown fields such as `title` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryResponse {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub braille_summary: Option<String>,
    #[serde(default)]
    pub key_entity: Option<String>,
}

/// Everything the client shows, owned for the length of one session.
///
/// Each transition assigns all four output fields, so `error` and the
/// result fields are never set at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryState {
    pub url: String,
    summary: String,
    braille_summary: String,
    key_entity: String,
    error: String,
}

impl SummaryState {
    /// Create a state with the given URL input and nothing else
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn braille_summary(&self) -> &str {
        &self.braille_summary
    }

    pub fn key_entity(&self) -> &str {
        &self.key_entity
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    /// True when the URL input is empty or only whitespace
    pub fn url_is_blank(&self) -> bool {
        self.url.trim().is_empty()
    }

    /// Drop any previous result or error
    pub fn clear(&mut self) {
        self.set_outputs(String::new(), String::new(), String::new(), String::new());
    }

    pub fn reject_empty_url(&mut self) {
        self.set_outputs(
            String::new(),
            String::new(),
            String::new(),
            EMPTY_URL_MESSAGE.to_string(),
        );
    }

    /// Copy the service response verbatim
    pub fn apply_response(&mut self, response: SummaryResponse) {
        self.set_outputs(
            response.summary.unwrap_or_default(),
            response.braille_summary.unwrap_or_default(),
            response.key_entity.unwrap_or_default(),
            String::new(),
        );
    }

    pub fn apply_failure(&mut self) {
        self.set_outputs(
            String::new(),
            String::new(),
            String::new(),
            REQUEST_FAILED_MESSAGE.to_string(),
        );
    }

    fn set_outputs(
        &mut self,
        summary: String,
        braille_summary: String,
        key_entity: String,
        error: String,
    ) {
        self.summary = summary;
        self.braille_summary = braille_summary;
        self.key_entity = key_entity;
        self.error = error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_ignores_unknown_fields() {
        let body = r#"{"title":"Bears","summary":"S","braille_summary":"B","key_entity":"K"}"#;
        let response: SummaryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.summary.as_deref(), Some("S"));
        assert_eq!(response.braille_summary.as_deref(), Some("B"));
        assert_eq!(response.key_entity.as_deref(), Some("K"));
    }

    #[test]
    fn response_tolerates_missing_and_null_fields() {
        let response: SummaryResponse =
            serde_json::from_str(r#"{"summary":"S","key_entity":null}"#).unwrap();
        assert_eq!(response.summary.as_deref(), Some("S"));
        assert_eq!(response.braille_summary, None);
        assert_eq!(response.key_entity, None);
    }

    #[test]
    fn response_rejects_non_string_fields() {
        assert!(serde_json::from_str::<SummaryResponse>(r#"{"summary":42}"#).is_err());
    }

    #[test]
    fn blank_url_detection() {
        assert!(SummaryState::with_url("").url_is_blank());
        assert!(SummaryState::with_url(" \t\n").url_is_blank());
        assert!(!SummaryState::with_url("https://example.com/a").url_is_blank());
    }

    #[test]
    fn failure_clears_previous_result() {
        let mut state = SummaryState::with_url("https://example.com/a");
        state.apply_response(SummaryResponse {
            summary: Some("S".into()),
            braille_summary: Some("B".into()),
            key_entity: Some("K".into()),
        });
        state.apply_failure();

        assert_eq!(state.error(), REQUEST_FAILED_MESSAGE);
        assert!(state.summary().is_empty());
        assert!(state.braille_summary().is_empty());
        assert!(state.key_entity().is_empty());
        assert_eq!(state.url, "https://example.com/a");
    }

    #[test]
    fn response_clears_previous_error() {
        let mut state = SummaryState::with_url("x");
        state.reject_empty_url();
        state.apply_response(SummaryResponse {
            summary: Some("S".into()),
            ..SummaryResponse::default()
        });

        assert!(state.error().is_empty());
        assert_eq!(state.summary(), "S");
        assert!(state.braille_summary().is_empty());
        assert!(state.key_entity().is_empty());
    }
}
