/// IO requests emitted by the pure update function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Ask the counter engine for a fresh metrics snapshot.
    LoadMetrics,
    /// Ask the counter engine for a read-only fetch of the latest total.
    FetchLatestCount,
    /// Report the session summary before the page goes away.
    ReportSessionEnd,
}
