//! Time source abstraction for testability.
//!
//! The boot sequence and the cursor blink are driven by deadlines measured on
//! a monotonic clock, and `whoami` prints the local wall-clock time. Both go
//! through the `TimeSource` trait so tests can replace them with a logical
//! clock that only moves when told to.

use chrono::{Local, NaiveDate, NaiveDateTime};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Abstraction over time-related operations.
pub trait TimeSource: Send + Sync + std::fmt::Debug {
    /// Get the current instant for measuring elapsed time.
    fn now(&self) -> Instant;

    /// Current local wall-clock date and time.
    fn local_now(&self) -> NaiveDateTime;
}

/// Type alias for shared time source.
pub type SharedTimeSource = Arc<dyn TimeSource>;

/// Production implementation using actual system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeSource;

impl RealTimeSource {
    pub fn shared() -> SharedTimeSource {
        Arc::new(Self)
    }
}

impl TimeSource for RealTimeSource {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Test implementation with controllable time.
///
/// - `now()` returns a logical instant based on internal counter
/// - `advance()` moves logical time forward (no actual sleeping)
/// - `local_now()` returns the base date-time plus logical elapsed time
///
/// # Example
///
/// ```
/// use termfolio::services::time_source::{TimeSource, TestTimeSource};
/// use std::time::Duration;
///
/// let time = TestTimeSource::new();
/// let start = time.now();
///
/// time.advance(Duration::from_secs(5));
///
/// assert_eq!(time.now() - start, Duration::from_secs(5));
/// ```
#[derive(Debug)]
pub struct TestTimeSource {
    /// Logical time in nanoseconds since creation.
    logical_nanos: AtomicU64,
    /// Real instant at creation, used for Instant arithmetic.
    base_instant: Instant,
    /// Wall-clock reading at logical time zero.
    base_datetime: NaiveDateTime,
}

impl Default for TestTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTimeSource {
    /// Create a test clock whose wall clock starts at 2025-04-16 09:30:00.
    pub fn new() -> Self {
        let base = NaiveDate::from_ymd_opt(2025, 4, 16)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("constant base date is valid");
        Self::with_datetime(base)
    }

    /// Create a test clock whose wall clock starts at `base_datetime`.
    pub fn with_datetime(base_datetime: NaiveDateTime) -> Self {
        Self {
            logical_nanos: AtomicU64::new(0),
            base_instant: Instant::now(),
            base_datetime,
        }
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Advance logical time by the given duration.
    ///
    /// This is the primary way to simulate time passage in tests.
    pub fn advance(&self, duration: Duration) {
        self.logical_nanos
            .fetch_add(duration.as_nanos() as u64, Ordering::SeqCst);
    }

    /// Get the logical elapsed time since creation.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.logical_nanos.load(Ordering::SeqCst))
    }
}

impl TimeSource for TestTimeSource {
    fn now(&self) -> Instant {
        self.base_instant + self.elapsed()
    }

    fn local_now(&self) -> NaiveDateTime {
        let elapsed = chrono::Duration::from_std(self.elapsed()).unwrap_or(chrono::Duration::zero());
        self.base_datetime
            .checked_add_signed(elapsed)
            .unwrap_or(self.base_datetime)
    }
}
