use std::sync::Arc;
use std::time::Duration;

use chrono::Timelike;
use serde::{Deserialize, Serialize};
use serde_json::json;
use vitrine_logging::{vitrine_info, vitrine_warn};

use crate::backend::{build_client, map_reqwest_error, MetricsBackend};
use crate::config::{FirebaseConfig, NowFn};
use crate::types::{BackendKind, CounterError, FailureKind, VisitorMetrics};
use crate::visitor::VisitorInfo;

/// Stored shape of the shared stats node. Absent fields default to zero,
/// matching a database that has never been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsSnapshot {
    pub total_visitors: u64,
    pub today_visitors: u64,
    pub page_views: u64,
    pub online_users: u64,
}

/// Visitor detail record pushed alongside the counters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorRecord {
    #[serde(flatten)]
    pub info: VisitorInfo,
    pub date: String,
    pub hour: u32,
}

/// End-of-session summary pushed to the session node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub session_id: String,
    pub time_spent: u64,
    pub page_views: u32,
    pub timestamp: String,
}

/// The realtime-database operations the counter needs. `RestStatsDatabase`
/// is the production handle; tests substitute their own.
#[async_trait::async_trait]
pub trait StatsDatabase: Send + Sync {
    async fn read_stats(&self) -> Result<StatsSnapshot, CounterError>;
    async fn write_total(&self, value: u64) -> Result<(), CounterError>;
    async fn push_visitor(&self, record: &VisitorRecord) -> Result<(), CounterError>;
    async fn increment_daily(&self, date: &str) -> Result<(), CounterError>;
    async fn increment_hourly(&self, date: &str, hour: u32) -> Result<(), CounterError>;
    async fn push_session(&self, record: &SessionRecord) -> Result<(), CounterError>;
}

/// REST handle over a Firebase realtime database.
pub struct RestStatsDatabase {
    base_url: String,
    client: reqwest::Client,
}

impl RestStatsDatabase {
    pub fn new(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, CounterError> {
        let client = build_client(connect_timeout, request_timeout)?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}.json", self.base_url, path)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, CounterError> {
        let status = response.status();
        if !status.is_success() {
            return Err(CounterError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(response)
    }

    async fn put(&self, path: &str, body: &serde_json::Value) -> Result<(), CounterError> {
        let response = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        Self::check(response).await?;
        Ok(())
    }

    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<(), CounterError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl StatsDatabase for RestStatsDatabase {
    async fn read_stats(&self) -> Result<StatsSnapshot, CounterError> {
        let response = self
            .client
            .get(self.url("portfolio-stats"))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = Self::check(response).await?;
        // The database returns a literal `null` for a node never written.
        let stats: Option<StatsSnapshot> = response.json().await.map_err(map_reqwest_error)?;
        Ok(stats.unwrap_or_default())
    }

    async fn write_total(&self, value: u64) -> Result<(), CounterError> {
        self.put("portfolio-stats/totalVisitors", &json!(value)).await
    }

    async fn push_visitor(&self, record: &VisitorRecord) -> Result<(), CounterError> {
        let body = serde_json::to_value(record)
            .map_err(|err| CounterError::new(FailureKind::MalformedResponse, err.to_string()))?;
        self.post("visitors", &body).await
    }

    async fn increment_daily(&self, date: &str) -> Result<(), CounterError> {
        // Server-side increment keeps the bucketed counters atomic.
        self.put(
            &format!("daily-stats/{date}/visitors"),
            &json!({".sv": {"increment": 1}}),
        )
        .await
    }

    async fn increment_hourly(&self, date: &str, hour: u32) -> Result<(), CounterError> {
        self.put(
            &format!("hourly-stats/{date}/{hour}"),
            &json!({".sv": {"increment": 1}}),
        )
        .await
    }

    async fn push_session(&self, record: &SessionRecord) -> Result<(), CounterError> {
        let body = serde_json::to_value(record)
            .map_err(|err| CounterError::new(FailureKind::MalformedResponse, err.to_string()))?;
        self.post("session-data", &body).await
    }
}

/// Backend over an externally supplied realtime-database handle.
pub struct FirebaseBackend {
    db: Option<Arc<dyn StatsDatabase>>,
    now_utc: NowFn,
}

impl FirebaseBackend {
    pub fn new(db: Arc<dyn StatsDatabase>, now_utc: NowFn) -> Self {
        Self {
            db: Some(db),
            now_utc,
        }
    }

    /// Builds the REST handle from configuration. A missing database URL is
    /// not a construction error; the first fetch reports it and the caller
    /// falls back.
    pub fn from_config(
        config: &FirebaseConfig,
        connect_timeout: Duration,
        request_timeout: Duration,
        now_utc: NowFn,
    ) -> Result<Self, CounterError> {
        if config.database_url.is_empty() {
            return Ok(Self { db: None, now_utc });
        }
        let db = RestStatsDatabase::new(
            config.database_url.clone(),
            connect_timeout,
            request_timeout,
        )?;
        Ok(Self::new(Arc::new(db), now_utc))
    }

    fn handle(&self) -> Result<&Arc<dyn StatsDatabase>, CounterError> {
        self.db.as_ref().ok_or_else(|| {
            CounterError::new(FailureKind::Misconfigured, "database handle not configured")
        })
    }

    /// Best-effort end-of-session summary; the page teardown never waits
    /// for it and the write may be dropped.
    pub fn spawn_session_report(&self, record: SessionRecord) {
        let Ok(db) = self.handle() else {
            return;
        };
        let db = db.clone();
        tokio::spawn(async move {
            if let Err(err) = db.push_session(&record).await {
                vitrine_warn!("session report dropped: {err}");
            }
        });
    }
}

#[async_trait::async_trait]
impl MetricsBackend for FirebaseBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Firebase
    }

    async fn fetch_metrics(&self, visitor: &VisitorInfo) -> Result<VisitorMetrics, CounterError> {
        let db = self.handle()?.clone();
        let stats = db.read_stats().await?;
        let total = stats.total_visitors + 1;
        db.write_total(total).await?;

        let now = (self.now_utc)();
        let record = VisitorRecord {
            info: visitor.clone(),
            date: now.format("%Y-%m-%d").to_string(),
            hour: now.hour(),
        };
        // Detail record and bucketed counters are best-effort.
        tokio::spawn(async move {
            if let Err(err) = db.push_visitor(&record).await {
                vitrine_warn!("visitor record dropped: {err}");
            }
            if let Err(err) = db.increment_daily(&record.date).await {
                vitrine_warn!("daily counter skipped: {err}");
            }
            if let Err(err) = db.increment_hourly(&record.date, record.hour).await {
                vitrine_warn!("hourly counter skipped: {err}");
            }
        });

        vitrine_info!("firebase visitor #{total}");
        Ok(VisitorMetrics {
            total_visitors: total,
            today_visitors: stats.today_visitors,
            page_views: stats.page_views,
            online_users: stats.online_users.max(1),
        })
    }
}
