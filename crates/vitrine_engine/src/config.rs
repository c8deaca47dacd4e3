use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Clock injected through configuration so tests can pin the date used for
/// day- and hour-bucketed keys.
pub type NowFn = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Namespace/key pair on the hosted CountAPI counting service.
#[derive(Debug, Clone)]
pub struct CountApiConfig {
    pub enabled: bool,
    pub namespace: String,
    pub key: String,
    pub base_url: String,
}

impl Default for CountApiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            namespace: String::new(),
            key: "visits".to_string(),
            base_url: "https://api.countapi.xyz".to_string(),
        }
    }
}

/// Connection details for a Firebase realtime database.
#[derive(Debug, Clone, Default)]
pub struct FirebaseConfig {
    pub enabled: bool,
    pub database_url: String,
    pub project_id: String,
    pub api_key: String,
}

/// Location of a JSON stats document in a GitHub repository.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    pub enabled: bool,
    pub repo: String,
    pub data_file: String,
    pub base_url: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            repo: String::new(),
            data_file: "visitor-data.json".to_string(),
            base_url: "https://raw.githubusercontent.com".to_string(),
        }
    }
}

/// Static configuration for the visitor counter. Built once and never
/// mutated at runtime; backend priority is CountAPI, Firebase, GitHub.
#[derive(Clone)]
pub struct CounterConfig {
    pub countapi: CountApiConfig,
    pub firebase: FirebaseConfig,
    pub github: GithubConfig,
    /// Floor for the synthetic fallback total.
    pub fallback_baseline: u64,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub now_utc: NowFn,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            countapi: CountApiConfig::default(),
            firebase: FirebaseConfig::default(),
            github: GithubConfig::default(),
            fallback_baseline: 100,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            now_utc: Arc::new(Utc::now),
        }
    }
}

impl fmt::Debug for CounterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterConfig")
            .field("countapi", &self.countapi)
            .field("firebase", &self.firebase)
            .field("github", &self.github)
            .field("fallback_baseline", &self.fallback_baseline)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}
