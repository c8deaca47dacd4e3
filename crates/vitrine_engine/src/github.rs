use std::time::Duration;

use vitrine_logging::vitrine_info;

use crate::backend::{build_client, map_reqwest_error, MetricsBackend};
use crate::config::GithubConfig;
use crate::types::{BackendKind, CounterError, FailureKind, VisitorMetrics};
use crate::visitor::VisitorInfo;

/// Backend over a JSON stats document hosted in a GitHub repository.
///
/// Read-only: the document's four fields are used verbatim.
pub struct GithubJsonBackend {
    config: GithubConfig,
    client: reqwest::Client,
}

impl GithubJsonBackend {
    pub fn new(
        config: GithubConfig,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, CounterError> {
        let client = build_client(connect_timeout, request_timeout)?;
        Ok(Self { config, client })
    }
}

#[async_trait::async_trait]
impl MetricsBackend for GithubJsonBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::GithubJson
    }

    async fn fetch_metrics(&self, _visitor: &VisitorInfo) -> Result<VisitorMetrics, CounterError> {
        let url = format!(
            "{}/{}/main/{}",
            self.config.base_url, self.config.repo, self.config.data_file
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(CounterError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        let metrics: VisitorMetrics = response.json().await.map_err(map_reqwest_error)?;
        vitrine_info!("github metrics loaded");
        Ok(metrics)
    }
}
