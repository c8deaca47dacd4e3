use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use chrono::Utc;
use vitrine_core::{Effect, Msg, VisitorMetrics};
use vitrine_engine::{CounterConfig, CounterEvent, CounterHandle};
use vitrine_logging::vitrine_info;

pub struct EffectRunner {
    counter: CounterHandle,
    started: Instant,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        // No remote service is configured out of the box, so the counter
        // serves synthetic metrics.
        let mut config = CounterConfig::default();
        config.now_utc = std::sync::Arc::new(Utc::now);

        let counter = CounterHandle::new(config);
        let runner = Self {
            counter,
            started: Instant::now(),
        };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>, session_views: u32) {
        for effect in effects {
            match effect {
                Effect::LoadMetrics => self.counter.load(),
                Effect::FetchLatestCount => self.counter.refresh(),
                Effect::ReportSessionEnd => {
                    let seconds = self.started.elapsed().as_secs();
                    vitrine_info!(
                        "session report: {seconds}s spent, {session_views} views"
                    );
                    self.counter.report_session(seconds, session_views);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let counter = self.counter.clone();
        thread::spawn(move || loop {
            if let Some(event) = counter.try_recv() {
                let msg = match event {
                    CounterEvent::MetricsLoaded { metrics, backend } => {
                        vitrine_info!("metrics loaded from {backend}");
                        Msg::MetricsLoaded(map_metrics(metrics))
                    }
                    CounterEvent::LatestTotal { value } => Msg::LatestTotalFetched(value),
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_metrics(metrics: vitrine_engine::VisitorMetrics) -> VisitorMetrics {
    VisitorMetrics {
        total_visitors: metrics.total_visitors,
        today_visitors: metrics.today_visitors,
        page_views: metrics.page_views,
        online_users: metrics.online_users,
    }
}
