//! Shared application state
//!
//! Immutable data cloned into every request handler.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::build_info::BuildInfo;

#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<StateInner>,
}

#[derive(Debug)]
struct StateInner {
    started_at: DateTime<Utc>,
    build: BuildInfo,
}

impl AppState {
    pub fn new() -> Self {
        Self::started_at(Utc::now())
    }

    /// State with a fixed start time
    pub fn started_at(started_at: DateTime<Utc>) -> Self {
        Self {
            inner: Arc::new(StateInner {
                started_at,
                build: BuildInfo::current(),
            }),
        }
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.inner.started_at
    }

    pub fn build_info(&self) -> &BuildInfo {
        &self.inner.build
    }

    /// Whole seconds since the service started, never negative
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.inner.started_at).num_seconds().max(0)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
