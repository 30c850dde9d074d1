//! Toast-style notification channel between domain flows and the hosting UI.
//!
//! DESIGN
//! ======
//! Controllers and services report outcomes here instead of rendering
//! anything themselves. The hosting UI decides how a [`Notice`] is shown;
//! this crate only guarantees delivery order and a bounded in-memory buffer
//! for hosts (and tests) that want to observe what was reported.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Maximum notices retained by [`NotificationCenter`]; oldest are evicted.
pub const NOTICE_BUFFER_CAP: usize = 64;

/// Outcome class of a reported notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A single user-facing notification: title line plus supporting body text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    #[must_use]
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, title: title.into(), body: body.into() }
    }

    #[must_use]
    pub fn failure(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Failure, title: title.into(), body: body.into() }
    }
}

/// Fire-and-forget reporting channel. Implementations must tolerate being
/// called from any flow at any time; the caller never consumes a return
/// value.
pub trait NotificationSink: Send + Sync {
    fn report(&self, notice: Notice);
}

/// In-memory sink buffering the most recent [`NOTICE_BUFFER_CAP`] notices.
///
/// Cheap to clone; all clones share one buffer. Hosts drain it on their own
/// cadence to drive toast rendering.
#[derive(Clone, Default)]
pub struct NotificationCenter {
    inner: Arc<Mutex<VecDeque<Notice>>>,
}

impl NotificationCenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of buffered notices, oldest first.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.lock().iter().cloned().collect()
    }

    /// Remove and return all buffered notices, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        self.lock().drain(..).collect()
    }

    /// Most recently reported notice, if any.
    #[must_use]
    pub fn last(&self) -> Option<Notice> {
        self.lock().back().cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Notice>> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl NotificationSink for NotificationCenter {
    fn report(&self, notice: Notice) {
        let mut buf = self.lock();
        if buf.len() >= NOTICE_BUFFER_CAP {
            buf.pop_front();
        }
        buf.push_back(notice);
    }
}
