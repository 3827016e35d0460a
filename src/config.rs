//! # Run configuration.
//!
//! [`RunConfig`] centralizes the settings a runner needs before `run()`:
//! the deadline for the whole run and the event bus capacity.
//!
//! ## Sentinel values
//! - `bus_capacity` is clamped to a minimum of 1 by [`Bus`](crate::Bus).
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use taskrunner::RunConfig;
//!
//! let mut cfg = RunConfig::default();
//! cfg.deadline = Duration::from_secs(5);
//!
//! assert_eq!(cfg.deadline, Duration::from_secs(5));
//! ```

use std::time::Duration;

/// Default deadline applied when a run is started without an explicit one.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(10);

/// Configuration for a single run.
///
/// A runner is configured before `run()` and used for exactly one run.
#[derive(Clone, Copy, Debug)]
pub struct RunConfig {
    /// Maximum time the whole run may take before the deadline timer fires
    /// the completion latch with a timeout error.
    pub deadline: Duration,

    /// Capacity of the event bus each runner builds for itself.
    ///
    /// Slow subscribers that lag behind more than `bus_capacity` events will
    /// skip older items. Minimum value is 1 (enforced by the bus). Ignored
    /// when a shared external bus is attached via the runner's `bus()`
    /// builder.
    pub bus_capacity: usize,
}

impl Default for RunConfig {
    /// Provides a default configuration:
    /// - `deadline = 10s`
    /// - `bus_capacity = 64`
    fn default() -> Self {
        Self {
            deadline: DEFAULT_DEADLINE,
            bus_capacity: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deadline_is_ten_seconds() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.deadline, Duration::from_secs(10));
        assert_eq!(cfg.deadline, DEFAULT_DEADLINE);
    }
}
