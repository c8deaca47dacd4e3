use chrono::{DateTime, Local, Utc};
use rand::{distr::Alphanumeric, RngExt};
use serde::Serialize;

/// Ephemeral per-session descriptor.
///
/// Generated once per page load; only ever written to the analytics
/// backend, never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorInfo {
    pub user_agent: String,
    pub language: String,
    pub referrer: String,
    pub timestamp: String,
    pub timezone: String,
    pub session_id: String,
}

impl VisitorInfo {
    pub fn detect(now: DateTime<Utc>) -> Self {
        Self {
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            language: "en-US".to_string(),
            referrer: "direct".to_string(),
            timestamp: now.to_rfc3339(),
            timezone: Local::now().offset().to_string(),
            session_id: generate_session_id(now),
        }
    }
}

fn generate_session_id(now: DateTime<Utc>) -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!(
        "session_{}_{}",
        now.timestamp_millis(),
        suffix.to_lowercase()
    )
}
