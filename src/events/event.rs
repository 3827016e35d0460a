//! # Events emitted by runners.
//!
//! [`EventKind`] classifies the run lifecycle; [`Event`] carries metadata
//! such as the task name, an error message, the deadline, a wall-clock
//! timestamp, and a global sequence number.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore order when events are delivered out
//! of order.
//!
//! ## Example
//! ```rust
//! use taskrunner::{Event, EventKind};
//!
//! let ev = Event::now(EventKind::TaskFailed)
//!     .with_task("demo-task")
//!     .with_error("boom");
//!
//! assert_eq!(ev.kind, EventKind::TaskFailed);
//! assert_eq!(ev.task.as_deref(), Some("demo-task"));
//! assert_eq!(ev.error.as_deref(), Some("boom"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of run lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A run started; the deadline timer is armed.
    ///
    /// Sets: `deadline`, `at`, `seq`.
    RunStarted,

    /// A task is being started.
    ///
    /// Sets: `task`, `at`, `seq`.
    TaskStarting,

    /// A task completed successfully.
    ///
    /// Sets: `task`, `at`, `seq`.
    TaskSucceeded,

    /// A task reported an error.
    ///
    /// Sets: `task`, `error`, `at`, `seq`.
    TaskFailed,

    /// The deadline timer went off with the run still open.
    ///
    /// Published before the resulting `RunCompleted`. A completion racing in
    /// between can leave a stale `DeadlineHit` whose run actually succeeded;
    /// `RunCompleted` carries the authoritative outcome.
    ///
    /// Sets: `deadline`, `at`, `seq`.
    DeadlineHit,

    /// The completion latch fired; the run is over.
    ///
    /// Sets: `error` (absent on success), `at`, `seq`.
    RunCompleted,
}

/// A run lifecycle event with metadata.
#[derive(Debug, Clone)]
pub struct Event {
    /// What happened.
    pub kind: EventKind,
    /// Task name, when the event concerns a single task.
    pub task: Option<String>,
    /// Error message, when the event carries a failure.
    pub error: Option<String>,
    /// Short stable error label (snake_case) for metrics, when the event
    /// carries a failure.
    pub label: Option<&'static str>,
    /// The run deadline, for `RunStarted` / `DeadlineHit`.
    pub deadline: Option<Duration>,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Globally monotonic sequence number.
    pub seq: u64,
}

impl Event {
    /// Creates an event stamped with the current time and the next sequence
    /// number.
    pub fn now(kind: EventKind) -> Self {
        Self {
            kind,
            task: None,
            error: None,
            label: None,
            deadline: None,
            at: SystemTime::now(),
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
        }
    }

    /// Attaches a task name.
    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }

    /// Attaches an error message.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Attaches a stable error label.
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Attaches the run deadline.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}
