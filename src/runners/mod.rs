//! # Runners: completion coordination for a group of tasks.
//!
//! Internal modules:
//! - [`latch`]: at-most-once completion gate shared by every trigger source;
//! - [`deadline`]: one-shot timer racing against task completion;
//! - [`parallel`]: starts every task concurrently, succeeds when all do;
//! - [`series`]: starts tasks strictly in order, stops at the first error;
//! - [`facade`]: the [`TaskRunner`] entry points.

mod deadline;
mod facade;
mod latch;
mod parallel;
mod series;

pub use facade::TaskRunner;
pub use parallel::ParallelRunner;
pub use series::SeriesRunner;

use crate::error::RunError;

/// Outward completion notification for a run.
///
/// Invoked exactly once per run with `Ok(())` (all tasks succeeded within the
/// deadline) or the first error observed by the completion latch.
pub type Done = Box<dyn FnOnce(Result<(), RunError>) + Send + 'static>;
