use std::sync::Arc;
use std::time::Duration;

use crate::config::CounterConfig;
use crate::countapi::CountApiBackend;
use crate::firebase::FirebaseBackend;
use crate::github::GithubJsonBackend;
use crate::session::SessionStore;
use crate::synthetic::SyntheticBackend;
use crate::types::{BackendKind, CounterError, FailureKind, VisitorMetrics};
use crate::visitor::VisitorInfo;

/// A source of visitor metrics: one of the remote services or the synthetic
/// fallback posing as one.
#[async_trait::async_trait]
pub trait MetricsBackend: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// Produces a fresh metrics snapshot, counting this visit.
    async fn fetch_metrics(&self, visitor: &VisitorInfo) -> Result<VisitorMetrics, CounterError>;
}

/// Selects the first enabled backend in the fixed priority order CountAPI,
/// Firebase, GitHub, falling back to the synthetic generator when none is
/// enabled. Selection happens once at construction, not per refresh.
pub fn select_backend(
    config: &CounterConfig,
    sessions: Arc<dyn SessionStore>,
) -> Result<Box<dyn MetricsBackend>, CounterError> {
    if config.countapi.enabled {
        return Ok(Box::new(CountApiBackend::new(
            config.countapi.clone(),
            config.connect_timeout,
            config.request_timeout,
            sessions,
            config.now_utc.clone(),
        )?));
    }
    if config.firebase.enabled {
        return Ok(Box::new(FirebaseBackend::from_config(
            &config.firebase,
            config.connect_timeout,
            config.request_timeout,
            config.now_utc.clone(),
        )?));
    }
    if config.github.enabled {
        return Ok(Box::new(GithubJsonBackend::new(
            config.github.clone(),
            config.connect_timeout,
            config.request_timeout,
        )?));
    }
    Ok(Box::new(SyntheticBackend::new(config.fallback_baseline)))
}

pub(crate) fn build_client(
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<reqwest::Client, CounterError> {
    reqwest::Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()
        .map_err(|err| CounterError::new(FailureKind::Network, err.to_string()))
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> CounterError {
    if err.is_timeout() {
        return CounterError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return CounterError::new(FailureKind::MalformedResponse, err.to_string());
    }
    CounterError::new(FailureKind::Network, err.to_string())
}
