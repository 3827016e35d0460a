//! # Deadline timer: one-shot race against task completion.
//!
//! Armed unconditionally at the start of every run, including empty runs.
//! After the configured duration it fires the latch with
//! [`RunError::DeadlineExceeded`]; if the run already completed, that firing
//! is absorbed as a no-op.
//!
//! The timer is never cancelled. A run that finishes early leaves the timer
//! sleeping in the background; when it eventually fires, the latch swallows
//! it. No cancellation bookkeeping, at the cost of a dangling sleep.

use std::sync::Arc;
use std::time::Duration;

use tokio::time;

use crate::error::RunError;
use crate::events::{Bus, Event, EventKind};
use crate::runners::latch::CompletionLatch;

/// Arms the one-shot deadline timer for a run.
///
/// Must be called within a tokio runtime. `DeadlineHit` is published before
/// the latch fires, so subscribers see the cause ahead of `RunCompleted`. A
/// task completion racing into the latch between the two steps produces a
/// stale `DeadlineHit` with no matching timeout outcome; subscribers must
/// treat `RunCompleted` as authoritative.
pub(crate) fn arm(latch: &Arc<CompletionLatch>, after: Duration, bus: Bus) {
    let latch = Arc::clone(latch);
    tokio::spawn(async move {
        time::sleep(after).await;
        if latch.is_fired() {
            return;
        }
        bus.publish(Event::now(EventKind::DeadlineHit).with_deadline(after));
        latch.fire(Err(RunError::DeadlineExceeded));
    });
}
