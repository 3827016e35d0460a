//! # Run lifecycle events.
//!
//! Runners publish [`Event`]s describing the run lifecycle to an optional
//! [`Bus`]. Events are observability only: no runner behavior depends on
//! whether anyone is listening.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
