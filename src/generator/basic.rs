use core::{cell::Cell, cmp::Ordering};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Error, IdGenStatus, Result, TimeSource, Uid64, UidGenerator};

/// A non-concurrent ID generator suitable for single-threaded environments.
///
/// This generator is lightweight and fast, but **not thread-safe**.
///
/// ## Recommended When
/// - You're in a single-threaded environment (no shared access)
/// - You want the fastest generator
///
/// ## See Also
/// - [`LockUidGenerator`]
///
/// [`LockUidGenerator`]: crate::LockUidGenerator
pub struct BasicUidGenerator<T: TimeSource> {
    state: Cell<Uid64>,
    clock: T,
}

impl<T: TimeSource> BasicUidGenerator<T> {
    /// Creates a new [`BasicUidGenerator`] for the given worker id.
    ///
    /// The initial timestamp and sequence are zero, meaning "never issued";
    /// the first poll rolls the state over to the current clock reading.
    /// `worker_id` is masked to its low 10 bits and encoded into every
    /// generated ID.
    ///
    /// # Example
    /// ```
    /// use uid64::{BasicUidGenerator, UidGenerator, UnixClock};
    ///
    /// let generator = BasicUidGenerator::new(7, UnixClock);
    /// let id = generator.try_next_id(|_| std::thread::yield_now()).unwrap();
    /// assert_eq!(id.worker_id(), 7);
    /// ```
    pub fn new(worker_id: u64, clock: T) -> Self {
        Self::from_components(0, worker_id, 0, clock)
    }

    /// Creates a generator from explicit component values.
    ///
    /// Useful for restoring state persisted by the caller or for pinning the
    /// starting point in tests. Prefer [`Self::new`] otherwise.
    pub fn from_components(timestamp: u64, worker_id: u64, sequence: u64, clock: T) -> Self {
        let state = Uid64::from_components(timestamp, worker_id, sequence);
        Self {
            state: Cell::new(state),
            clock,
        }
    }

    /// Attempts to issue the next available ID.
    ///
    /// Reads the clock once and compares it against the last issued
    /// timestamp:
    ///
    /// - clock ahead: sequence resets to 0 and the new tick is recorded
    /// - same tick: the sequence increments, or [`IdGenStatus::Pending`] is
    ///   returned when all 4096 values are spent
    /// - clock behind: [`Error::ClockRegression`], state untouched
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_poll_id(&self) -> Result<IdGenStatus> {
        let now = self.clock.current_millis();
        let state = self.state.get();
        let last = state.timestamp();

        match now.cmp(&last) {
            Ordering::Equal => {
                if state.has_sequence_room() {
                    let updated = state.increment_sequence();
                    self.state.set(updated);
                    Ok(IdGenStatus::Ready { id: updated })
                } else {
                    Ok(IdGenStatus::Pending { yield_for: 1 })
                }
            }
            Ordering::Greater => {
                let updated = state.rollover_to_timestamp(now);
                self.state.set(updated);
                Ok(IdGenStatus::Ready { id: updated })
            }
            Ordering::Less => Err(Self::cold_clock_behind(now, last)),
        }
    }

    #[cold]
    #[inline(never)]
    fn cold_clock_behind(now: u64, last: u64) -> Error {
        Error::ClockRegression {
            last_ms: last,
            now_ms: now,
        }
    }
}

impl<T: TimeSource> UidGenerator for BasicUidGenerator<T> {
    fn try_poll_id(&self) -> Result<IdGenStatus> {
        self.try_poll_id()
    }
}
