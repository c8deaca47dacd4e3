use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Which service supplied a metrics snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    CountApi,
    Firebase,
    GithubJson,
    Synthetic,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::CountApi => write!(f, "countapi"),
            BackendKind::Firebase => write!(f, "firebase"),
            BackendKind::GithubJson => write!(f, "github-json"),
            BackendKind::Synthetic => write!(f, "synthetic"),
        }
    }
}

/// Snapshot of the visitor statistics as produced by a backend.
///
/// All fields are non-negative by construction; a wire document carrying a
/// negative number fails deserialization and the caller falls back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorMetrics {
    pub total_visitors: u64,
    pub today_visitors: u64,
    pub page_views: u64,
    pub online_users: u64,
}

/// Events emitted by the counter worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterEvent {
    /// A metrics snapshot arrived, from the named backend or the fallback.
    MetricsLoaded {
        metrics: VisitorMetrics,
        backend: BackendKind,
    },
    /// The periodic read-only refresh fetched the latest total.
    LatestTotal { value: u64 },
}

/// Failure from a counter backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterError {
    pub kind: FailureKind,
    pub message: String,
}

impl CounterError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for CounterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for CounterError {}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("backend disabled")]
    Disabled,
    #[error("backend misconfigured")]
    Misconfigured,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("malformed response")]
    MalformedResponse,
    #[error("network error")]
    Network,
}
