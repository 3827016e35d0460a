//! # Function-backed task (`TaskFn`)
//!
//! [`TaskFn`] wraps a closure `F: Fn() -> Fut`, producing a fresh future per
//! invocation. This avoids shared mutable state inside the task itself; if a
//! task needs shared state, capture an `Arc<...>` explicitly in the closure.
//!
//! The common handle type is [`TaskRef`], an `Arc<dyn Task>` suitable for
//! handing to a runner.
//!
//! ## Example
//! ```rust
//! use taskrunner::{TaskFn, TaskRef, TaskError};
//!
//! let t: TaskRef = TaskFn::arc("worker", || async {
//!     // do work...
//!     Ok::<_, TaskError>(())
//! });
//!
//! assert_eq!(t.name(), "worker");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TaskError;
use crate::tasks::task::Task;

/// Shared reference to a task.
pub type TaskRef = Arc<dyn Task>;

/// Function-backed task implementation.
///
/// Wraps a closure that *creates* a new future per invocation.
#[derive(Debug)]
pub struct TaskFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> TaskFn<F> {
    /// Creates a new function-backed task.
    ///
    /// Prefer [`TaskFn::arc`] when you immediately need a [`TaskRef`].
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the task and returns it as a shared handle (`Arc<dyn Task>`).
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut> Task for TaskFn<F>
where
    F: Fn() -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = Result<(), TaskError>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> Result<(), TaskError> {
        (self.f)().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_task_fn_runs_closure() {
        let t: TaskRef = TaskFn::arc("ok", || async { Ok::<_, TaskError>(()) });
        assert_eq!(t.name(), "ok");
        assert!(t.run().await.is_ok());
    }

    #[tokio::test]
    async fn test_task_fn_propagates_error() {
        let t: TaskRef = TaskFn::arc("boom", || async { Err::<(), _>(TaskError::fail("boom")) });
        assert_eq!(t.run().await, Err(TaskError::fail("boom")));
    }
}
