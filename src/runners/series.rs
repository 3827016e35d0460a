//! # Series runner: one task at a time, strictly in list order.
//!
//! [`SeriesRunner`] starts the task at index 0 and advances only on success:
//!
//! - task *i* succeeded → task *i+1* starts (or the latch fires `Ok(())`
//!   after the last one);
//! - task *i* failed → its error fires the latch and the chain stops; the
//!   remaining tasks are never started;
//! - the deadline elapsed → the latch fires the timeout error and the chain
//!   stops before the next task would start.
//!
//! A task already in flight when the deadline fires is not interrupted; its
//! eventual completion is absorbed as a no-op.

use std::sync::Arc;
use std::time::Duration;

use crate::config::RunConfig;
use crate::error::RunError;
use crate::events::{Bus, Event, EventKind};
use crate::runners::{deadline, latch::CompletionLatch, Done};
use crate::tasks::TaskRef;

/// Runs a group of tasks strictly in order, for exactly one run.
///
/// Configure with the builder methods, then call [`run`](SeriesRunner::run)
/// from within a tokio runtime. `run()` never blocks: it launches the chain
/// and returns; completion arrives through the `on_done` notification.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use taskrunner::{SeriesRunner, TaskError, TaskFn, TaskRef};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let (tx, rx) = tokio::sync::oneshot::channel();
///     let tasks: Vec<TaskRef> = vec![
///         TaskFn::arc("first", || async { Ok::<_, TaskError>(()) }),
///         TaskFn::arc("second", || async { Ok::<_, TaskError>(()) }),
///     ];
///
///     SeriesRunner::new()
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
pub struct SeriesRunner {
    cfg: RunConfig,
    tasks: Vec<TaskRef>,
    done: Option<Done>,
    bus: Bus,
}

impl SeriesRunner {
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

    /// Sets the tasks to execute, in order. An empty list means "nothing to
    /// do".
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

    /// Arms the deadline timer and starts the chain at index 0.
    ///
    /// Must be called within a tokio runtime. With an empty task list the
    /// notification fires synchronously before `run()` returns; otherwise it
    /// fires asynchronously once every task has succeeded in order, one
    /// fails, or the deadline elapses.
    pub fn run(self) {
        self.bus
            .publish(Event::now(EventKind::RunStarted).with_deadline(self.cfg.deadline));

        let latch = Arc::new(CompletionLatch::new(self.done, self.bus.clone()));
        deadline::arm(&latch, self.cfg.deadline, self.bus.clone());

        if self.tasks.is_empty() {
            latch.fire(Ok(()));
            return;
        }

        let tasks = self.tasks;
        let bus = self.bus;
        tokio::spawn(async move {
            for task in tasks {
                // The deadline (or an earlier failure) already ended the run;
                // the rest of the chain is never started.
                if latch.is_fired() {
                    return;
                }

                bus.publish(Event::now(EventKind::TaskStarting).with_task(task.name()));

                match task.run().await {
                    Ok(()) => {
                        bus.publish(Event::now(EventKind::TaskSucceeded).with_task(task.name()));
                    }
                    Err(err) => {
                        bus.publish(
                            Event::now(EventKind::TaskFailed)
                                .with_task(task.name())
                                .with_error(err.as_message())
                                .with_label(err.as_label()),
                        );
                        latch.fire(Err(RunError::Task(err)));
                        return;
                    }
                }
            }
            latch.fire(Ok(()));
        });
    }
}

impl Default for SeriesRunner {
    fn default() -> Self {
        Self::new()
    }
}
