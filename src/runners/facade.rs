//! # TaskRunner facade.
//!
//! [`TaskRunner`] is the front door: pick a mode (parallel or series), hand
//! over the tasks, and either supply a [`Done`] callback or await the
//! outcome. Each call constructs a single-use runner with the default or the
//! given deadline and starts it.
//!
//! The callback variants are fire-and-forget: the runner's state moves into
//! spawned tokio tasks, which keeps the run alive until its notification
//! fires even though the caller holds no reference to it.

use std::time::Duration;

use tokio::sync::oneshot;

use crate::config::DEFAULT_DEADLINE;
use crate::error::RunError;
use crate::runners::{Done, ParallelRunner, SeriesRunner};
use crate::tasks::TaskRef;

/// Entry points for running a group of tasks.
///
/// # Example
/// ```
/// use taskrunner::{TaskError, TaskFn, TaskRef, TaskRunner};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let tasks: Vec<TaskRef> = vec![
///         TaskFn::arc("a", || async { Ok::<_, TaskError>(()) }),
///         TaskFn::arc("b", || async { Ok::<_, TaskError>(()) }),
///     ];
///
///     let result = TaskRunner::parallel(tasks).await;
///     assert!(result.is_ok());
/// }
/// ```
pub struct TaskRunner;

impl TaskRunner {
    /// Runs the tasks concurrently with the default deadline (10s).
    ///
    /// Returns immediately; `done` fires exactly once when the run resolves.
    pub fn run_in_parallel(tasks: Vec<TaskRef>, done: Done) {
        Self::run_in_parallel_within(DEFAULT_DEADLINE, tasks, done);
    }

    /// Runs the tasks concurrently with an explicit deadline.
    pub fn run_in_parallel_within(deadline: Duration, tasks: Vec<TaskRef>, done: Done) {
        ParallelRunner::new()
            .deadline(deadline)
            .tasks(tasks)
            .on_done(done)
            .run();
    }

    /// Runs the tasks strictly in order with the default deadline (10s).
    ///
    /// Returns immediately; `done` fires exactly once when the run resolves.
    pub fn run_in_series(tasks: Vec<TaskRef>, done: Done) {
        Self::run_in_series_within(DEFAULT_DEADLINE, tasks, done);
    }

    /// Runs the tasks strictly in order with an explicit deadline.
    pub fn run_in_series_within(deadline: Duration, tasks: Vec<TaskRef>, done: Done) {
        SeriesRunner::new()
            .deadline(deadline)
            .tasks(tasks)
            .on_done(done)
            .run();
    }

    /// Awaitable variant of [`run_in_parallel`](TaskRunner::run_in_parallel).
    pub async fn parallel(tasks: Vec<TaskRef>) -> Result<(), RunError> {
        Self::parallel_within(DEFAULT_DEADLINE, tasks).await
    }

    /// Awaitable variant of
    /// [`run_in_parallel_within`](TaskRunner::run_in_parallel_within).
    pub async fn parallel_within(deadline: Duration, tasks: Vec<TaskRef>) -> Result<(), RunError> {
        let (tx, rx) = oneshot::channel();
        Self::run_in_parallel_within(
            deadline,
            tasks,
            Box::new(move |res| {
                let _ = tx.send(res);
            }),
        );
        await_outcome(rx).await
    }

    /// Awaitable variant of [`run_in_series`](TaskRunner::run_in_series).
    pub async fn series(tasks: Vec<TaskRef>) -> Result<(), RunError> {
        Self::series_within(DEFAULT_DEADLINE, tasks).await
    }

    /// Awaitable variant of
    /// [`run_in_series_within`](TaskRunner::run_in_series_within).
    pub async fn series_within(deadline: Duration, tasks: Vec<TaskRef>) -> Result<(), RunError> {
        let (tx, rx) = oneshot::channel();
        Self::run_in_series_within(
            deadline,
            tasks,
            Box::new(move |res| {
                let _ = tx.send(res);
            }),
        );
        await_outcome(rx).await
    }
}

/// Bridges the oneshot back into a run outcome.
///
/// The sender lives inside the completion latch until the run fires, and the
/// deadline timer guarantees every run fires, so a dropped sender can only
/// mean the run was torn down with the runtime; report it as the deadline.
async fn await_outcome(rx: oneshot::Receiver<Result<(), RunError>>) -> Result<(), RunError> {
    match rx.await {
        Ok(outcome) => outcome,
        Err(_) => Err(RunError::DeadlineExceeded),
    }
}
