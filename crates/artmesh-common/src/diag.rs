//! Diagnostics observer used by the pipelines instead of ambient logging.
//!
//! Generators report progress and recoverable problems through a
//! [`Diagnostics`] handle passed in by the caller. The default
//! implementation forwards to `tracing`; tests capture events in memory
//! so pipeline behavior can be asserted without a global subscriber.

use std::sync::Mutex;

/// Severity of a recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Observer interface for pipeline events.
pub trait Diagnostics: Send + Sync {
    /// Record a single event.
    fn record_event(&self, level: EventLevel, message: &str);
}

/// Default diagnostics that forward events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn record_event(&self, level: EventLevel, message: &str) {
        match level {
            EventLevel::Debug => tracing::debug!("{message}"),
            EventLevel::Info => tracing::info!("{message}"),
            EventLevel::Warn => tracing::warn!("{message}"),
            EventLevel::Error => tracing::error!("{message}"),
        }
    }
}

/// In-memory diagnostics for tests.
#[derive(Debug, Default)]
pub struct CapturedDiagnostics {
    events: Mutex<Vec<(EventLevel, String)>>,
}

impl CapturedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events in order.
    pub fn events(&self) -> Vec<(EventLevel, String)> {
        self.events.lock().expect("diagnostics lock poisoned").clone()
    }

    /// Messages recorded at the given level.
    pub fn messages_at(&self, level: EventLevel) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl Diagnostics for CapturedDiagnostics {
    fn record_event(&self, level: EventLevel, message: &str) {
        self.events
            .lock()
            .expect("diagnostics lock poisoned")
            .push((level, message.to_string()));
    }
}
