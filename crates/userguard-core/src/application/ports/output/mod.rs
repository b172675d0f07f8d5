//! Driven (output) ports.

use chrono::{DateTime, Utc};

/// Port for reading the current time.
///
/// Implemented by:
/// - [`SystemClock`] (production)
/// - `MockClock` (unit tests, generated by mockall)
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current UTC time.
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
