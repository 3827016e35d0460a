//! # taskrunner
//!
//! **taskrunner** is an embeddable task-orchestration primitive for Rust.
//!
//! It runs a collection of asynchronous tasks — either concurrently or
//! strictly in order — and reports a single aggregated completion signal once
//! all tasks finish, one fails, or a configured deadline elapses, whichever
//! happens first. It is a library building block for callers who already
//! have asynchronous operations and need a uniform way to wait on a group of
//! them with bounded time and first-error semantics.
//!
//! ## Architecture
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   TaskRef    │   │   TaskRef    │   │   TaskRef    │
//!     │(user task #1)│   │(user task #2)│   │(user task #3)│
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  ParallelRunner / SeriesRunner (one run each)             │
//! │  - Deadline timer (one-shot, armed at run())              │
//! │  - Completion latch (at-most-once outward notification)   │
//! │  - Optional Bus (lifecycle events for subscribers)        │
//! └──────────────────────────┬────────────────────────────────┘
//!                            ▼
//!          Done callback / awaited outcome (exactly once):
//!          Ok(()) | RunError::Task(..) | RunError::DeadlineExceeded
//! ```
//!
//! ### Completion race
//! Every trigger source — a task's success, a task's failure, the deadline
//! timer — drives the same completion latch. The first one wins; everything
//! after it is absorbed as a no-op. There is no cancellation: a task that
//! outlives the deadline keeps running in the background and its result is
//! discarded.
//!
//! ## Features
//! | Area            | Description                                            | Key types / traits                  |
//! |-----------------|--------------------------------------------------------|-------------------------------------|
//! | **Tasks**       | Define tasks as trait impls or plain closures.         | [`Task`], [`TaskFn`], [`TaskRef`]   |
//! | **Runners**     | Parallel or series execution with a deadline.          | [`ParallelRunner`], [`SeriesRunner`]|
//! | **Facade**      | One-call entry points, callback or awaitable.          | [`TaskRunner`]                      |
//! | **Errors**      | Typed errors for runs and task execution.              | [`RunError`], [`TaskError`]         |
//! | **Events**      | Observe run lifecycle through a broadcast bus.         | [`Bus`], [`Event`], [`Subscribe`]   |
//! | **Configuration**| Deadline and bus capacity defaults.                   | [`RunConfig`]                       |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use taskrunner::{TaskError, TaskFn, TaskRef, TaskRunner};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let tasks: Vec<TaskRef> = vec![
//!         TaskFn::arc("fetch", || async {
//!             // network call, I/O, computation...
//!             Ok::<_, TaskError>(())
//!         }),
//!         TaskFn::arc("store", || async { Ok::<_, TaskError>(()) }),
//!     ];
//!
//!     // All tasks run concurrently; the outcome resolves exactly once.
//!     let result = TaskRunner::parallel_within(Duration::from_secs(5), tasks).await;
//!     assert!(result.is_ok());
//! }
//! ```

mod config;
mod error;
mod events;
mod runners;
mod subscribers;
mod tasks;

// ---- Public re-exports ----

pub use config::{RunConfig, DEFAULT_DEADLINE};
pub use error::{RunError, TaskError};
pub use events::{Bus, Event, EventKind};
pub use runners::{Done, ParallelRunner, SeriesRunner, TaskRunner};
pub use subscribers::{attach, Subscribe};
pub use tasks::{Task, TaskFn, TaskRef};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
