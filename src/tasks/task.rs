//! # Task abstraction.
//!
//! A [`Task`] is an opaque asynchronous unit of work. Its future resolves
//! exactly once with `Ok(())` (success) or a [`TaskError`] (failure) — the
//! async equivalent of a single-shot completion handle.
//!
//! Runners invoke a task at most once per run and never interrupt it: a task
//! that outlives the run's deadline keeps running in the background and its
//! result is discarded.

use async_trait::async_trait;

use crate::error::TaskError;

/// # Asynchronous unit of work.
///
/// A `Task` has a stable [`name`](Task::name) and an async
/// [`run`](Task::run) method that resolves exactly once.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use taskrunner::{Task, TaskError};
///
/// struct Demo;
///
/// #[async_trait]
/// impl Task for Demo {
///     fn name(&self) -> &str { "demo" }
///
///     async fn run(&self) -> Result<(), TaskError> {
///         // do work...
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Task: Send + Sync + 'static {
    /// Returns a stable, human-readable task name.
    fn name(&self) -> &str;

    /// Executes the task until completion.
    ///
    /// The returned result stands in for the single-shot completion handle:
    /// resolving it twice is impossible by construction.
    async fn run(&self) -> Result<(), TaskError>;
}
