//! Two-step delete confirmation
//!
//! The first delete request for an entry arms a short window; only a second
//! request for the same entry inside that window commits the delete.

use std::time::{Duration, Instant};
use tracing::debug;

/// Window used by every admin list
pub const DEFAULT_CONFIRM_WINDOW: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Waiting for the confirming request
    Armed,
    /// Second request arrived in time; delete this id
    Confirmed(String),
}

#[derive(Debug, Clone)]
pub struct DeleteConfirmation {
    window: Duration,
    armed: Option<(String, Instant)>,
}

impl Default for DeleteConfirmation {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIRM_WINDOW)
    }
}

impl DeleteConfirmation {
    pub fn new(window: Duration) -> Self {
        Self { window, armed: None }
    }

    pub fn request(&mut self, id: &str) -> ConfirmOutcome {
        self.request_at(id, Instant::now())
    }

    /// Register a delete click for `id` at `now`
    pub fn request_at(&mut self, id: &str, now: Instant) -> ConfirmOutcome {
        if let Some((armed_id, armed_at)) = &self.armed {
            if armed_id == id && now.duration_since(*armed_at) <= self.window {
                self.armed = None;
                debug!(id = id, "Delete confirmed");
                return ConfirmOutcome::Confirmed(id.to_string());
            }
        }

        debug!(id = id, window_ms = self.window.as_millis() as u64, "Delete armed");
        self.armed = Some((id.to_string(), now));
        ConfirmOutcome::Armed
    }

    /// Id currently waiting for confirmation, if its window is still open
    pub fn pending_at(&self, now: Instant) -> Option<&str> {
        match &self.armed {
            Some((id, armed_at)) if now.duration_since(*armed_at) <= self.window => Some(id),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }
}
