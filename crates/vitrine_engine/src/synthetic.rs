use rand::{Rng, RngExt};

use crate::backend::MetricsBackend;
use crate::types::{BackendKind, CounterError, VisitorMetrics};
use crate::visitor::VisitorInfo;

/// Plausible placeholder metrics for when no remote backend is enabled or
/// the selected one fails. The only guarantee is `total_visitors` at or
/// above the baseline; this is a display placeholder, not a real count.
pub fn synthesize(baseline: u64, rng: &mut impl Rng) -> VisitorMetrics {
    VisitorMetrics {
        total_visitors: baseline + rng.random_range(0..100),
        today_visitors: rng.random_range(0..50) + 10,
        page_views: baseline * 14 / 10 + rng.random_range(0..200),
        online_users: rng.random_range(1..=8),
    }
}

/// The fallback generator posing as a backend so selection stays uniform.
pub struct SyntheticBackend {
    baseline: u64,
}

impl SyntheticBackend {
    pub fn new(baseline: u64) -> Self {
        Self { baseline }
    }
}

#[async_trait::async_trait]
impl MetricsBackend for SyntheticBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Synthetic
    }

    async fn fetch_metrics(&self, _visitor: &VisitorInfo) -> Result<VisitorMetrics, CounterError> {
        Ok(synthesize(self.baseline, &mut rand::rng()))
    }
}
