use thiserror::Error;

/// A result type defaulting to the crate-wide [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `uid64` can emit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The time source reported a millisecond earlier than the last issued
    /// timestamp for this generator instance.
    ///
    /// This happens when the system clock is adjusted backward (NTP step,
    /// manual change). The generator refuses to issue an ID rather than risk
    /// a collision; later calls succeed once the clock catches up.
    #[error("clock regression: last issued at {last_ms} ms, clock reports {now_ms} ms")]
    ClockRegression { last_ms: u64, now_ms: u64 },

    /// A bounded wait for the clock to advance past an exhausted tick ran
    /// out of time.
    #[error("timed out after {waited_ms} ms waiting for the clock to advance")]
    WaitTimeout { waited_ms: u64 },

    /// The operation failed because a lock was **poisoned**.
    ///
    /// This occurs when a thread panics while holding the generator lock.
    #[error("generator lock poisoned")]
    LockPoisoned,
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Self::LockPoisoned
    }
}
