//! Vitrine engine: visitor counter IO, backend selection and the worker
//! handle that drives them.
mod backend;
mod config;
mod countapi;
mod engine;
mod firebase;
mod github;
mod session;
mod synthetic;
mod types;
mod visitor;

pub use backend::{select_backend, MetricsBackend};
pub use config::{CountApiConfig, CounterConfig, FirebaseConfig, GithubConfig, NowFn};
pub use countapi::CountApiBackend;
pub use engine::CounterHandle;
pub use firebase::{
    FirebaseBackend, RestStatsDatabase, SessionRecord, StatsDatabase, StatsSnapshot, VisitorRecord,
};
pub use github::GithubJsonBackend;
pub use session::{MemorySessionStore, SessionStore};
pub use synthetic::{synthesize, SyntheticBackend};
pub use types::{BackendKind, CounterError, CounterEvent, FailureKind, VisitorMetrics};
pub use visitor::VisitorInfo;
