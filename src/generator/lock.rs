use std::{
    cmp::Ordering,
    sync::{Arc, Mutex},
};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Error, IdGenStatus, Result, TimeSource, Uid64, UidGenerator};

/// A lock-based ID generator suitable for multi-threaded environments.
///
/// The state lives behind an [`Arc<Mutex<_>>`], and the whole issuance step
/// (clock read through state mutation) runs inside one critical section, so
/// concurrent callers can never interleave the read-modify-write.
///
/// ## Recommended When
/// - You're in a multi-threaded environment
/// - Several callers share one worker id
///
/// ## See Also
/// - [`BasicUidGenerator`]
///
/// [`BasicUidGenerator`]: crate::BasicUidGenerator
pub struct LockUidGenerator<T: TimeSource> {
    state: Arc<Mutex<Uid64>>,
    clock: T,
}

impl<T: TimeSource> LockUidGenerator<T> {
    /// Creates a new [`LockUidGenerator`] for the given worker id.
    ///
    /// The initial timestamp and sequence are zero ("never issued");
    /// `worker_id` is masked to its low 10 bits and encoded into every
    /// generated ID.
    ///
    /// # Example
    /// ```
    /// use uid64::{LockUidGenerator, UidGenerator, UnixClock};
    ///
    /// let generator = LockUidGenerator::new(3, UnixClock);
    /// let id = generator.try_next_id(|_| std::thread::yield_now()).unwrap();
    /// assert_eq!(id.worker_id(), 3);
    /// ```
    pub fn new(worker_id: u64, clock: T) -> Self {
        Self::from_components(0, worker_id, 0, clock)
    }

    /// Creates a generator from explicit component values, e.g. state
    /// restored from persistent storage. Prefer [`Self::new`] otherwise.
    pub fn from_components(timestamp: u64, worker_id: u64, sequence: u64, clock: T) -> Self {
        let state = Uid64::from_components(timestamp, worker_id, sequence);
        Self {
            state: Arc::new(Mutex::new(state)),
            clock,
        }
    }

    /// Attempts to issue the next available ID.
    ///
    /// Semantics match [`BasicUidGenerator::try_poll_id`], with the whole
    /// step guarded by the state mutex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockRegression`] when the clock reads earlier than
    /// the last issued timestamp, and [`Error::LockPoisoned`] if another
    /// thread panicked while holding the lock.
    ///
    /// [`BasicUidGenerator::try_poll_id`]: crate::BasicUidGenerator::try_poll_id
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_poll_id(&self) -> Result<IdGenStatus> {
        let mut state = self.state.lock()?;
        let now = self.clock.current_millis();
        let last = state.timestamp();

        match now.cmp(&last) {
            Ordering::Equal => {
                if state.has_sequence_room() {
                    *state = state.increment_sequence();
                    Ok(IdGenStatus::Ready { id: *state })
                } else {
                    Ok(IdGenStatus::Pending { yield_for: 1 })
                }
            }
            Ordering::Greater => {
                *state = state.rollover_to_timestamp(now);
                Ok(IdGenStatus::Ready { id: *state })
            }
            Ordering::Less => Err(Error::ClockRegression {
                last_ms: last,
                now_ms: now,
            }),
        }
    }
}

impl<T: TimeSource> UidGenerator for LockUidGenerator<T> {
    fn try_poll_id(&self) -> Result<IdGenStatus> {
        self.try_poll_id()
    }
}
