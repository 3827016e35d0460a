//! # Completion latch: the at-most-once gate.
//!
//! Every trigger source of a run (per-task completion, per-task failure, the
//! deadline timer) drives the same [`CompletionLatch`]. The first
//! [`fire`](CompletionLatch::fire) wins and delivers the outward
//! notification; every later call is a no-op.
//!
//! ## Rules
//! - The winner is decided by an atomic swap on the fired flag, so two task
//!   callbacks (or a callback and the timer) racing concurrently still
//!   produce exactly one notification.
//! - The outward callback is consumed on first fire; an unset callback makes
//!   firing a silent no-op.
//! - The `RunCompleted` event is published only by the winning fire.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::error::RunError;
use crate::events::{Bus, Event, EventKind};
use crate::runners::Done;

/// At-most-once gate turning many possible triggers into one notification.
pub(crate) struct CompletionLatch {
    fired: AtomicBool,
    notify: Mutex<Option<Done>>,
    bus: Bus,
}

impl CompletionLatch {
    /// Creates a latch holding the (optional) outward notification.
    pub(crate) fn new(notify: Option<Done>, bus: Bus) -> Self {
        Self {
            fired: AtomicBool::new(false),
            notify: Mutex::new(notify),
            bus,
        }
    }

    /// Fires the latch with the run outcome.
    ///
    /// The first call wins: it publishes `RunCompleted`, invokes the outward
    /// notification, and returns `true`. Every later call, from any source,
    /// returns `false` without observable effect.
    pub(crate) fn fire(&self, outcome: Result<(), RunError>) -> bool {
        if self.fired.swap(true, Ordering::AcqRel) {
            return false;
        }

        let mut ev = Event::now(EventKind::RunCompleted);
        if let Err(err) = &outcome {
            ev = ev.with_error(err.as_message()).with_label(err.as_label());
        }
        self.bus.publish(ev);

        let notify = self.notify.lock().ok().and_then(|mut slot| slot.take());
        if let Some(done) = notify {
            done(outcome);
        }
        true
    }

    /// Whether the latch has already fired.
    pub(crate) fn is_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    fn spy() -> (Arc<AtomicUsize>, Done) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let done: Done = Box::new(move |_res| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (count, done)
    }

    #[test]
    fn test_first_fire_wins() {
        let (count, done) = spy();
        let latch = CompletionLatch::new(Some(done), Bus::new(8));

        assert!(latch.fire(Ok(())));
        assert!(latch.is_fired());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_second_fire_is_a_no_op() {
        let (count, done) = spy();
        let latch = CompletionLatch::new(Some(done), Bus::new(8));

        assert!(latch.fire(Err(RunError::DeadlineExceeded)));
        assert!(!latch.fire(Ok(())));
        assert!(!latch.fire(Err(RunError::DeadlineExceeded)));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unset_notification_is_silent() {
        let latch = CompletionLatch::new(None, Bus::new(8));
        assert!(latch.fire(Ok(())));
        assert!(!latch.fire(Ok(())));
    }

    #[test]
    fn test_concurrent_fires_produce_one_notification() {
        let (count, done) = spy();
        let latch = Arc::new(CompletionLatch::new(Some(done), Bus::new(8)));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let latch = Arc::clone(&latch);
                std::thread::spawn(move || {
                    if i % 2 == 0 {
                        latch.fire(Ok(()))
                    } else {
                        latch.fire(Err(RunError::DeadlineExceeded))
                    }
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().expect("fire thread"))
            .filter(|won| *won)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_winning_fire_publishes_run_completed() {
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();
        let latch = CompletionLatch::new(None, bus);

        latch.fire(Err(RunError::DeadlineExceeded));
        latch.fire(Ok(()));

        let ev = rx.recv().await.expect("event");
        assert_eq!(ev.kind, EventKind::RunCompleted);
        assert_eq!(
            ev.error.as_deref(),
            Some("task execution exceeded the allotted duration")
        );
        assert_eq!(ev.label, Some("deadline_exceeded"));
        assert!(rx.try_recv().is_err());
    }
}
