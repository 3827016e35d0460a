//! Error types used by runners and tasks.
//!
//! Two enums cover the whole taxonomy:
//!
//! - [`TaskError`] — what an individual task reports through its completion.
//! - [`RunError`] — what a whole run reports through the outward notification:
//!   either the deadline elapsed or the first observed task failure.
//!
//! Both provide `as_label` / `as_message` helpers for logs and metrics.
//! Errors are never raised across the public boundary; every failure travels
//! through the completion channel.

use thiserror::Error;

/// # Errors produced by task execution.
///
/// A task resolves exactly once, with `Ok(())` or one of these.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Task execution failed; carries the task's own message.
    #[error("{error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },
}

impl TaskError {
    /// Creates a failure with the given message.
    ///
    /// # Example
    /// ```
    /// use taskrunner::TaskError;
    ///
    /// let err = TaskError::fail("connection refused");
    /// assert_eq!(err.to_string(), "connection refused");
    /// ```
    pub fn fail(error: impl Into<String>) -> Self {
        TaskError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            TaskError::Fail { .. } => "task_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            TaskError::Fail { error } => format!("error: {error}"),
        }
    }
}

/// # Errors reported by a run's outward notification.
///
/// A run fires its notification exactly once, with `Ok(())` or one of these.
/// Only the first error to reach the completion latch is reported; whether
/// that is a task failure or the deadline depends on which reaches the latch
/// first.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The run's deadline elapsed before every task completed.
    #[error("task execution exceeded the allotted duration")]
    DeadlineExceeded,

    /// A task reported an error; the task's own message is surfaced verbatim.
    #[error(transparent)]
    Task(#[from] TaskError),
}

impl RunError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use taskrunner::RunError;
    ///
    /// assert_eq!(RunError::DeadlineExceeded.as_label(), "deadline_exceeded");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RunError::DeadlineExceeded => "deadline_exceeded",
            RunError::Task(_) => "task_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RunError::DeadlineExceeded => self.to_string(),
            RunError::Task(e) => e.as_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_message_is_fixed() {
        assert_eq!(
            RunError::DeadlineExceeded.to_string(),
            "task execution exceeded the allotted duration"
        );
    }

    #[test]
    fn test_task_error_message_surfaces_verbatim() {
        let err: RunError = TaskError::fail("Task Error").into();
        assert_eq!(err.to_string(), "Task Error");
        assert_eq!(err.as_label(), "task_failed");
        assert_eq!(err.as_message(), "error: Task Error");
    }

    #[test]
    fn test_labels() {
        assert_eq!(TaskError::fail("x").as_label(), "task_failed");
        assert_eq!(RunError::DeadlineExceeded.as_label(), "deadline_exceeded");
    }
}
