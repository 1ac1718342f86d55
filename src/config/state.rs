// Application state module
// Read-only configuration plus the per-process values handlers need

use std::sync::Arc;
use std::time::Instant;

use crate::api::{ContactSink, LogSink};

use super::types::Config;

/// Application state shared by all connections.
///
/// Nothing here is mutable after startup; requests never coordinate
/// through shared state.
pub struct AppState {
    pub config: Config,
    /// Process start, for the health endpoint's uptime field
    started: Instant,
    /// Where accepted contact submissions go
    pub contact_sink: Arc<dyn ContactSink>,
}

impl AppState {
    /// Create state with the default log-only contact sink
    pub fn new(config: Config) -> Self {
        Self::with_sink(config, Arc::new(LogSink))
    }

    /// Create state with a custom contact sink (storage, email, tests)
    pub fn with_sink(config: Config, contact_sink: Arc<dyn ContactSink>) -> Self {
        Self {
            config,
            started: Instant::now(),
            contact_sink,
        }
    }

    /// Seconds since the server started
    pub fn uptime_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}
