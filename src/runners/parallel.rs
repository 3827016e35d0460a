//! # Parallel runner: start everything, succeed when everything does.
//!
//! [`ParallelRunner`] launches every task eagerly on the tokio worker pool
//! and aggregates their completions through the shared
//! [`CompletionLatch`](crate::runners::latch::CompletionLatch):
//!
//! - every task succeeded → latch fires `Ok(())`;
//! - any task failed → latch fires that task's error immediately, without
//!   waiting for the others;
//! - the deadline elapsed first → latch fires the timeout error.
//!
//! When two failures (or a failure and the deadline) race, whichever reaches
//! the latch first is reported. Under true concurrency that order is
//! non-deterministic.
//!
//! In-flight tasks are never interrupted; a straggler finishes in the
//! background and its result is absorbed as a no-op.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::RunConfig;
use crate::error::RunError;
use crate::events::{Bus, Event, EventKind};
use crate::runners::{deadline, latch::CompletionLatch, Done};
use crate::tasks::TaskRef;

/// Runs a group of tasks concurrently, for exactly one run.
///
/// Configure with the builder methods, then call [`run`](ParallelRunner::run)
/// from within a tokio runtime. `run()` never blocks: it launches the tasks
/// and returns; completion arrives through the `on_done` notification.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use taskrunner::{ParallelRunner, TaskError, TaskFn, TaskRef};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let (tx, rx) = tokio::sync::oneshot::channel();
///     let tasks: Vec<TaskRef> = vec![
///         TaskFn::arc("a", || async { Ok::<_, TaskError>(()) }),
///         TaskFn::arc("b", || async { Ok::<_, TaskError>(()) }),
///     ];
///
///     ParallelRunner::new()
///         .deadline(Duration::from_secs(1))
///         .tasks(tasks)
///         .on_done(move |res| {
///             let _ = tx.send(res);
///         })
///         .run();
///
///     assert_eq!(rx.await.unwrap(), Ok(()));
/// }
/// ```
pub struct ParallelRunner {
    cfg: RunConfig,
    tasks: Vec<TaskRef>,
    done: Option<Done>,
    bus: Bus,
}

impl ParallelRunner {
    /// Creates a runner with the default configuration (10s deadline,
    /// bus capacity 64).
    pub fn new() -> Self {
        Self::with_config(RunConfig::default())
    }

    /// Creates a runner with an explicit configuration. The event bus is
    /// sized from `cfg.bus_capacity`.
    pub fn with_config(cfg: RunConfig) -> Self {
        Self {
            cfg,
            tasks: Vec::new(),
            done: None,
            bus: Bus::new(cfg.bus_capacity),
        }
    }

    /// Sets the run deadline.
    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.cfg.deadline = deadline;
        self
    }

    /// Sets the tasks to execute. An empty list means "nothing to do".
    pub fn tasks(mut self, tasks: Vec<TaskRef>) -> Self {
        self.tasks = tasks;
        self
    }

    /// Sets the outward completion notification.
    ///
    /// When unset, firing the latch is a silent no-op (events are still
    /// published).
    pub fn on_done<F>(mut self, done: F) -> Self
    where
        F: FnOnce(Result<(), RunError>) + Send + 'static,
    {
        self.done = Some(Box::new(done));
        self
    }

    /// Replaces the runner's own bus with a shared external one, so several
    /// runners can publish to the same subscribers. `cfg.bus_capacity` no
    /// longer applies; the external bus keeps its own capacity.
    pub fn bus(mut self, bus: Bus) -> Self {
        self.bus = bus;
        self
    }

    /// Returns a handle to the runner's event bus, for subscribing before
    /// `run()` consumes the runner.
    pub fn events(&self) -> Bus {
        self.bus.clone()
    }

    /// Arms the deadline timer and starts every task.
    ///
    /// Must be called within a tokio runtime. With an empty task list the
    /// notification fires synchronously before `run()` returns; otherwise it
    /// fires asynchronously once all tasks succeed, one fails, or the
    /// deadline elapses.
    pub fn run(self) {
        self.bus
            .publish(Event::now(EventKind::RunStarted).with_deadline(self.cfg.deadline));

        let latch = Arc::new(CompletionLatch::new(self.done, self.bus.clone()));
        deadline::arm(&latch, self.cfg.deadline, self.bus.clone());

        if self.tasks.is_empty() {
            latch.fire(Ok(()));
            return;
        }

        let total = self.tasks.len();
        let completed = Arc::new(AtomicUsize::new(0));

        // All tasks are launched before any completion is processed; nothing
        // gates one task on another.
        for task in self.tasks {
            self.bus
                .publish(Event::now(EventKind::TaskStarting).with_task(task.name()));

            let latch = Arc::clone(&latch);
            let completed = Arc::clone(&completed);
            let bus = self.bus.clone();
            tokio::spawn(async move {
                match task.run().await {
                    Ok(()) => {
                        bus.publish(Event::now(EventKind::TaskSucceeded).with_task(task.name()));
                        if completed.fetch_add(1, Ordering::AcqRel) + 1 == total {
                            latch.fire(Ok(()));
                        }
                    }
                    Err(err) => {
                        bus.publish(
                            Event::now(EventKind::TaskFailed)
                                .with_task(task.name())
                                .with_error(err.as_message())
                                .with_label(err.as_label()),
                        );
                        latch.fire(Err(RunError::Task(err)));
                    }
                }
            });
        }
    }
}

impl Default for ParallelRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::tasks::TaskFn;
    use std::sync::atomic::AtomicBool;
    use std::time::Instant;
    use tokio::sync::broadcast::error::TryRecvError;
    use tokio::sync::oneshot;
    use tokio::time;

    fn succeeding_after(delay: Duration) -> TaskRef {
        TaskFn::arc("ok", move || async move {
            time::sleep(delay).await;
            Ok::<_, TaskError>(())
        })
    }

    fn failing_after(delay: Duration, msg: &'static str) -> TaskRef {
        TaskFn::arc("err", move || async move {
            time::sleep(delay).await;
            Err::<(), _>(TaskError::fail(msg))
        })
    }

    fn spy() -> (Arc<AtomicUsize>, Arc<std::sync::Mutex<Option<Result<(), RunError>>>>, Done) {
        let count = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(std::sync::Mutex::new(None));
        let (c, l) = (count.clone(), last.clone());
        let done: Done = Box::new(move |res| {
            c.fetch_add(1, Ordering::SeqCst);
            *l.lock().expect("spy lock") = Some(res);
        });
        (count, last, done)
    }

    #[tokio::test]
    async fn test_empty_task_list_completes_immediately() {
        let (count, last, done) = spy();
        ParallelRunner::new()
            .deadline(Duration::from_secs(1))
            .on_done(done)
            .run();

        // Fired synchronously within run(), well before the deadline.
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(*last.lock().expect("lock"), Some(Ok(())));
    }

    #[tokio::test]
    async fn test_all_tasks_succeed_within_deadline() {
        let started = Instant::now();
        let (tx, rx) = oneshot::channel();
        ParallelRunner::new()
            .deadline(Duration::from_secs(1))
            .tasks(vec![
                succeeding_after(Duration::from_millis(100)),
                succeeding_after(Duration::from_millis(200)),
            ])
            .on_done(move |res| {
                let _ = tx.send(res);
            })
            .run();

        assert_eq!(rx.await.expect("notification"), Ok(()));
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(200));
        assert!(elapsed < Duration::from_millis(900));
    }

    #[tokio::test]
    async fn test_first_failure_short_circuits() {
        let (count, last, done) = spy();
        ParallelRunner::new()
            .deadline(Duration::from_secs(1))
            .tasks(vec![
                succeeding_after(Duration::from_millis(200)),
                failing_after(Duration::from_millis(50), "Task Error"),
            ])
            .on_done(done)
            .run();

        // The failure arrives before the slow success finishes.
        time::sleep(Duration::from_millis(120)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(
            *last.lock().expect("lock"),
            Some(Err(RunError::Task(TaskError::fail("Task Error"))))
        );

        // The straggler's later success is absorbed.
        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_multiple_failures_notify_once() {
        let (count, _last, done) = spy();
        ParallelRunner::new()
            .deadline(Duration::from_millis(200))
            .tasks(vec![
                failing_after(Duration::from_millis(30), "first"),
                failing_after(Duration::from_millis(30), "second"),
                failing_after(Duration::from_millis(30), "third"),
            ])
            .on_done(done)
            .run();

        // Wait past the failures and past the deadline.
        time::sleep(Duration::from_millis(400)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_deadline_beats_overrunning_task() {
        let started = Instant::now();
        let (count, last, done) = spy();
        let task_ran = Arc::new(AtomicBool::new(false));
        let ran = task_ran.clone();
        ParallelRunner::new()
            .deadline(Duration::from_millis(200))
            .tasks(vec![TaskFn::arc("slow", move || {
                let ran = ran.clone();
                async move {
                    time::sleep(Duration::from_millis(600)).await;
                    ran.store(true, Ordering::SeqCst);
                    Ok::<_, TaskError>(())
                }
            })])
            .on_done(done)
            .run();

        time::sleep(Duration::from_millis(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(
            *last.lock().expect("lock"),
            Some(Err(RunError::DeadlineExceeded))
        );
        assert!(started.elapsed() >= Duration::from_millis(200));

        // The straggler still finishes in the background without a second
        // notification.
        time::sleep(Duration::from_millis(400)).await;
        assert!(task_ran.load(Ordering::SeqCst));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_publishes_lifecycle_events() {
        let runner = ParallelRunner::new()
            .deadline(Duration::from_secs(1))
            .tasks(vec![succeeding_after(Duration::from_millis(10))]);
        let mut rx = runner.events().subscribe();

        let (tx, rx_done) = oneshot::channel();
        runner
            .on_done(move |res| {
                let _ = tx.send(res);
            })
            .run();
        assert_eq!(rx_done.await.expect("notification"), Ok(()));

        let mut kinds = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            kinds.push(ev.kind);
        }
        assert_eq!(
            kinds,
            vec![
                EventKind::RunStarted,
                EventKind::TaskStarting,
                EventKind::TaskSucceeded,
                EventKind::RunCompleted,
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_event_carries_label() {
        let runner = ParallelRunner::new()
            .deadline(Duration::from_secs(1))
            .tasks(vec![failing_after(Duration::from_millis(10), "boom")]);
        let mut rx = runner.events().subscribe();

        let (tx, rx_done) = oneshot::channel();
        runner
            .on_done(move |res| {
                let _ = tx.send(res);
            })
            .run();
        assert!(rx_done.await.expect("notification").is_err());

        let failed = loop {
            let ev = rx.recv().await.expect("event");
            if ev.kind == EventKind::TaskFailed {
                break ev;
            }
        };
        assert_eq!(failed.label, Some("task_failed"));
        assert_eq!(failed.error.as_deref(), Some("error: boom"));
    }

    #[tokio::test]
    async fn test_config_capacity_bounds_event_buffer() {
        // With capacity 1, a subscriber that never drains keeps only the
        // most recent event and observes the gap as a lag.
        let cfg = RunConfig {
            deadline: Duration::from_secs(1),
            bus_capacity: 1,
        };
        let runner = ParallelRunner::with_config(cfg)
            .tasks(vec![succeeding_after(Duration::from_millis(10))]);
        let mut rx = runner.events().subscribe();

        let (tx, rx_done) = oneshot::channel();
        runner
            .on_done(move |res| {
                let _ = tx.send(res);
            })
            .run();
        assert_eq!(rx_done.await.expect("notification"), Ok(()));

        assert!(matches!(rx.try_recv(), Err(TryRecvError::Lagged(_))));
        let ev = rx.try_recv().expect("latest event");
        assert_eq!(ev.kind, EventKind::RunCompleted);
    }
}
