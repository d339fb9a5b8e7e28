use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated review submission. Only produced by `generation::validation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    pub business_name: String,
    pub business_type: String,
    pub review_text: String,
    /// Always within 1..=5.
    pub rating: u8,
}

/// Which path produced the reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Ai,
    Template,
}

/// A reply built for one request. Never stored.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedReply {
    pub text: String,
    pub source: ReplySource,
    pub generated_at: DateTime<Utc>,
}

/// Example payload served by `/api/demo`. Field names match the POST body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoExample {
    pub business_name: String,
    pub business_type: String,
    pub review_text: String,
    pub rating: u8,
}
