use std::time::{SystemTime, UNIX_EPOCH};

/// A trait for time sources that return a millisecond timestamp.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests. The unit is expected to be **milliseconds** since
/// the Unix epoch.
///
/// # Example
///
/// ```
/// use uid64::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> u64;
}

/// A wall-clock time source backed by [`SystemTime`].
///
/// Deliberately **not** monotonic: external adjustment (NTP steps, manual
/// clock changes) can move readings backward, and the issuance path must be
/// able to observe that and refuse to issue. A monotonic ticker would hide
/// exactly the condition the generator guards against.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnixClock;

impl TimeSource for UnixClock {
    fn current_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("System clock before UNIX_EPOCH")
            .as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_clock_is_past_2024() {
        // Friday, January 1, 2024 00:00:00 UTC
        assert!(UnixClock.current_millis() > 1_704_067_200_000);
    }

    #[test]
    fn unix_clock_fits_the_timestamp_field() {
        assert!(UnixClock.current_millis() <= crate::Uid64::max_timestamp());
    }
}
