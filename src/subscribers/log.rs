//! # LogWriter — simple event printer
//!
//! A minimal subscriber that prints incoming [`Event`]s to stdout.
//! Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! [run-started] deadline=Some(10s)
//! [starting] task=Some("worker")
//! [failed] task=Some("worker") label=Some("task_failed") err=Some("error: connection refused")
//! [deadline-hit] deadline=Some(10s)
//! [run-completed] label=Some("deadline_exceeded") err=Some("task execution exceeded the allotted duration")
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Event writer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::RunStarted => {
                println!("[run-started] deadline={:?}", e.deadline);
            }
            EventKind::TaskStarting => {
                println!("[starting] task={:?}", e.task);
            }
            EventKind::TaskSucceeded => {
                println!("[succeeded] task={:?}", e.task);
            }
            EventKind::TaskFailed => {
                println!(
                    "[failed] task={:?} label={:?} err={:?}",
                    e.task, e.label, e.error
                );
            }
            EventKind::DeadlineHit => {
                println!("[deadline-hit] deadline={:?}", e.deadline);
            }
            EventKind::RunCompleted => {
                println!("[run-completed] label={:?} err={:?}", e.label, e.error);
            }
        }
    }

    fn name(&self) -> &str {
        "LogWriter"
    }
}
