use std::sync::atomic::{AtomicBool, Ordering};

/// Session-scoped marker used to avoid double-counting unique-session hits.
pub trait SessionStore: Send + Sync {
    /// Marks the session as counted. Returns true the first time only.
    fn mark_counted(&self) -> bool;
}

/// Process-wide stand-in for browser session storage.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    counted: AtomicBool,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn mark_counted(&self) -> bool {
        !self.counted.swap(true, Ordering::SeqCst)
    }
}
