use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use vitrine_logging::{vitrine_debug, vitrine_error, vitrine_warn};

use crate::backend::{select_backend, MetricsBackend};
use crate::config::CounterConfig;
use crate::countapi::CountApiBackend;
use crate::firebase::{FirebaseBackend, SessionRecord};
use crate::session::{MemorySessionStore, SessionStore};
use crate::synthetic::{synthesize, SyntheticBackend};
use crate::types::{BackendKind, CounterEvent};
use crate::visitor::VisitorInfo;

enum CounterCommand {
    Load,
    Refresh,
    ReportSession { seconds_spent: u64, page_views: u32 },
}

/// Handle to the counter worker thread.
///
/// Commands go in, events come out; the worker owns its own Tokio runtime
/// so callers stay synchronous. Dropping every handle ends the worker.
#[derive(Clone)]
pub struct CounterHandle {
    cmd_tx: mpsc::Sender<CounterCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<CounterEvent>>>,
    session_id: String,
}

impl CounterHandle {
    pub fn new(config: CounterConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        // Built once per page load, like the browser original.
        let visitor = VisitorInfo::detect((config.now_utc)());
        let session_id = visitor.session_id.clone();

        thread::spawn(move || worker_loop(config, visitor, cmd_rx, event_tx));

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
            session_id,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Requests a fresh metrics snapshot from the active backend.
    pub fn load(&self) {
        let _ = self.cmd_tx.send(CounterCommand::Load);
    }

    /// Requests a read-only refresh of the latest total.
    pub fn refresh(&self) {
        let _ = self.cmd_tx.send(CounterCommand::Refresh);
    }

    /// Reports the session summary; best-effort, never awaited.
    pub fn report_session(&self, seconds_spent: u64, page_views: u32) {
        let _ = self.cmd_tx.send(CounterCommand::ReportSession {
            seconds_spent,
            page_views,
        });
    }

    pub fn try_recv(&self) -> Option<CounterEvent> {
        self.event_rx.lock().ok().and_then(|rx| rx.try_recv().ok())
    }
}

fn worker_loop(
    config: CounterConfig,
    visitor: VisitorInfo,
    cmd_rx: mpsc::Receiver<CounterCommand>,
    event_tx: mpsc::Sender<CounterEvent>,
) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            vitrine_error!("counter worker could not start a runtime: {err}");
            return;
        }
    };

    let sessions: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());

    // Exactly one backend serves a given refresh; picked here, once.
    let active: Arc<dyn MetricsBackend> = match select_backend(&config, sessions.clone()) {
        Ok(backend) => Arc::from(backend),
        Err(err) => {
            vitrine_warn!("backend construction failed, using fallback: {err}");
            Arc::new(SyntheticBackend::new(config.fallback_baseline))
        }
    };

    // The periodic refresh only serves the CountAPI service; the other
    // backends never receive live updates after the initial load.
    let refresh_reader = config
        .countapi
        .enabled
        .then(|| {
            CountApiBackend::new(
                config.countapi.clone(),
                config.connect_timeout,
                config.request_timeout,
                sessions.clone(),
                config.now_utc.clone(),
            )
        })
        .and_then(|reader| reader.ok())
        .map(Arc::new);

    // Session reports go to Firebase whenever it is enabled, independent of
    // which backend serves the reads.
    let session_reporter = config
        .firebase
        .enabled
        .then(|| {
            FirebaseBackend::from_config(
                &config.firebase,
                config.connect_timeout,
                config.request_timeout,
                config.now_utc.clone(),
            )
        })
        .and_then(|reporter| reporter.ok());

    let visitor = Arc::new(visitor);
    let baseline = config.fallback_baseline;
    let now_utc = config.now_utc.clone();

    while let Ok(command) = cmd_rx.recv() {
        match command {
            CounterCommand::Load => {
                let active = active.clone();
                let visitor = visitor.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = match active.fetch_metrics(&visitor).await {
                        Ok(metrics) => CounterEvent::MetricsLoaded {
                            metrics,
                            backend: active.kind(),
                        },
                        Err(err) => {
                            vitrine_warn!(
                                "{} backend failed, using fallback: {}",
                                active.kind(),
                                err
                            );
                            CounterEvent::MetricsLoaded {
                                metrics: synthesize(baseline, &mut rand::rng()),
                                backend: BackendKind::Synthetic,
                            }
                        }
                    };
                    let _ = event_tx.send(event);
                });
            }
            CounterCommand::Refresh => {
                let Some(reader) = refresh_reader.clone() else {
                    vitrine_debug!("refresh skipped; countapi disabled");
                    continue;
                };
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    match reader.fetch_current().await {
                        Ok(Some(value)) => {
                            let _ = event_tx.send(CounterEvent::LatestTotal { value });
                        }
                        Ok(None) => {}
                        Err(err) => vitrine_debug!("refresh failed: {err}"),
                    }
                });
            }
            CounterCommand::ReportSession {
                seconds_spent,
                page_views,
            } => {
                let Some(reporter) = session_reporter.as_ref() else {
                    continue;
                };
                let record = SessionRecord {
                    session_id: visitor.session_id.clone(),
                    time_spent: seconds_spent,
                    page_views,
                    timestamp: (now_utc)().to_rfc3339(),
                };
                let _guard = runtime.enter();
                reporter.spawn_session_report(record);
            }
        }
    }
}
