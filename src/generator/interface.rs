use std::time::{Duration, Instant};

use crate::{Error, IdGenStatus, Result, Uid64};

/// A minimal interface for issuing time-ordered 64-bit IDs.
///
/// Implementations provide the non-blocking [`UidGenerator::try_poll_id`];
/// the blocking and bounded-wait adapters are derived from it.
pub trait UidGenerator {
    /// Attempts to issue the next ID without blocking.
    ///
    /// # Returns
    /// - `Ok(IdGenStatus::Ready { id })`: a new ID is available
    /// - `Ok(IdGenStatus::Pending { yield_for })`: the sequence space for the
    ///   current tick is exhausted; retry after `yield_for` milliseconds
    /// - `Err(_)`: the clock regressed, or the generator lock was poisoned
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockRegression`] when the time source reports a
    /// millisecond earlier than the last issued timestamp. Generator state is
    /// left untouched; a later call succeeds once the clock catches up.
    fn try_poll_id(&self) -> Result<IdGenStatus>;

    /// Issues the next ID, invoking `f` with the suggested backoff in
    /// milliseconds whenever the current tick is exhausted.
    ///
    /// The wait is unbounded: a frozen clock keeps this polling forever. Use
    /// [`UidGenerator::try_next_id_for`] when a deadline is required.
    ///
    /// # Example
    /// ```
    /// use uid64::{BasicUidGenerator, UidGenerator, UnixClock};
    ///
    /// let generator = BasicUidGenerator::new(0, UnixClock);
    /// let id = generator.try_next_id(|_| std::thread::yield_now()).unwrap();
    /// assert_eq!(id.worker_id(), 0);
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates any error from [`UidGenerator::try_poll_id`].
    fn try_next_id(&self, mut f: impl FnMut(u64)) -> Result<Uid64> {
        loop {
            match self.try_poll_id()? {
                IdGenStatus::Ready { id } => break Ok(id),
                IdGenStatus::Pending { yield_for } => f(yield_for),
            }
        }
    }

    /// Issues the next ID, sleep-polling until `timeout` elapses.
    ///
    /// Each exhausted poll sleeps for the suggested backoff (at least one
    /// millisecond) instead of spinning, then re-checks the deadline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WaitTimeout`] if the clock fails to advance past the
    /// exhausted tick before the deadline, and propagates any error from
    /// [`UidGenerator::try_poll_id`].
    fn try_next_id_for(&self, timeout: Duration) -> Result<Uid64> {
        let start = Instant::now();
        loop {
            match self.try_poll_id()? {
                IdGenStatus::Ready { id } => break Ok(id),
                IdGenStatus::Pending { yield_for } => {
                    let waited = start.elapsed();
                    if waited >= timeout {
                        break Err(Error::WaitTimeout {
                            waited_ms: waited.as_millis() as u64,
                        });
                    }
                    std::thread::sleep(Duration::from_millis(yield_for.max(1)));
                }
            }
        }
    }
}
