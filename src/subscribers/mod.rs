//! # Subscribers: observe run events.
//!
//! A [`Subscribe`] implementation receives every [`Event`](crate::Event)
//! published on a [`Bus`](crate::Bus) it is attached to. Attachment spawns a
//! background listener that forwards events in order; the listener exits when
//! the bus is dropped.

mod subscriber;

#[cfg(feature = "logging")]
mod log;

pub use subscriber::{attach, Subscribe};

#[cfg(feature = "logging")]
pub use log::LogWriter;
