use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

#[cfg(feature = "tracing")]
use tracing::{instrument, warn};

use crate::{
    Error, LockUidGenerator, Result, TimeSource, Uid64, UidGenerator, UnixClock, native_uuid,
};

/// Worker id stamped into IDs when the caller does not supply one.
pub const DEFAULT_WORKER_ID: u64 = 1010;

/// Bound on how long a single issuance may wait for the clock to advance
/// past an exhausted tick before failing with [`Error::WaitTimeout`].
pub const ISSUE_WAIT: Duration = Duration::from_millis(500);

/// Outcome of a batch request: the IDs issued in call order, plus the number
/// of attempts that failed and were skipped.
///
/// A failed attempt (clock regression) is skipped, **not retried**, so
/// `ids.len() + failed as usize` always equals the requested count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdBatch {
    pub ids: Vec<Uid64>,
    pub failed: u64,
}

/// Reply shape of [`IdService::request_snowflake`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnowflakeReply {
    /// Requested count was absent or at most 1.
    One(Uid64),
    /// Requested count was greater than 1.
    Many(IdBatch),
}

/// Reply shape of [`IdService::request_uuid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UuidReply {
    One(String),
    Many(Vec<String>),
}

/// Host-facing entry point for both ID facilities.
///
/// The service owns one long-lived [`LockUidGenerator`] per (masked) worker
/// id, created on first use and held for the service lifetime. The
/// last-timestamp/sequence memory therefore persists across requests, so the
/// uniqueness and monotonicity guarantees hold process-wide, not merely
/// within a single call.
///
/// # Example
///
/// ```
/// use uid64::{IdService, SnowflakeReply, DEFAULT_WORKER_ID};
///
/// let service = IdService::default();
/// match service.request_snowflake(None, None).unwrap() {
///     SnowflakeReply::One(id) => assert_eq!(id.worker_id(), DEFAULT_WORKER_ID),
///     SnowflakeReply::Many(_) => unreachable!(),
/// }
/// ```
pub struct IdService<T: TimeSource + Clone = UnixClock> {
    clock: T,
    generators: Mutex<HashMap<u64, Arc<LockUidGenerator<T>>>>,
}

impl Default for IdService<UnixClock> {
    fn default() -> Self {
        Self::new(UnixClock)
    }
}

impl<T: TimeSource + Clone> IdService<T> {
    /// Creates a service issuing IDs against the given time source.
    pub fn new(clock: T) -> Self {
        Self {
            clock,
            generators: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the long-lived generator for `worker_id` (low 10 bits),
    /// creating it on first use.
    fn generator(&self, worker_id: u64) -> Result<Arc<LockUidGenerator<T>>> {
        let worker_id = worker_id & Uid64::WORKER_MASK;
        let mut generators = self.generators.lock()?;
        let generator = generators
            .entry(worker_id)
            .or_insert_with(|| Arc::new(LockUidGenerator::new(worker_id, self.clock.clone())));
        Ok(Arc::clone(generator))
    }

    /// Issues a single ID for `worker_id`, or [`DEFAULT_WORKER_ID`] when
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockRegression`] if the clock moved backward,
    /// [`Error::WaitTimeout`] if an exhausted tick failed to advance within
    /// [`ISSUE_WAIT`], or [`Error::LockPoisoned`].
    pub fn next_id(&self, worker_id: Option<u64>) -> Result<Uid64> {
        let generator = self.generator(worker_id.unwrap_or(DEFAULT_WORKER_ID))?;
        generator.try_next_id_for(ISSUE_WAIT)
    }

    /// Issues up to `count` IDs for `worker_id` in call order.
    ///
    /// An attempt that fails is skipped, not retried, and counted in
    /// [`IdBatch::failed`] so callers can distinguish partial success
    /// without comparing lengths.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockPoisoned`] if the generator lock is poisoned;
    /// per-attempt failures are reported through [`IdBatch::failed`] instead.
    pub fn next_batch(&self, count: u64, worker_id: Option<u64>) -> Result<IdBatch> {
        let generator = self.generator(worker_id.unwrap_or(DEFAULT_WORKER_ID))?;

        let mut ids = Vec::with_capacity(count as usize);
        let mut failed = 0;
        for _ in 0..count {
            match generator.try_next_id_for(ISSUE_WAIT) {
                Ok(id) => ids.push(id),
                Err(Error::LockPoisoned) => return Err(Error::LockPoisoned),
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    warn!(error = %_e, "skipping failed issuance in batch");
                    failed += 1;
                }
            }
        }
        Ok(IdBatch { ids, failed })
    }

    /// Optional-argument surface mirroring the embedding host's call
    /// convention.
    ///
    /// - `count` absent or at most 1: a single ID ([`SnowflakeReply::One`]).
    /// - `count` greater than 1: an ordered batch of up to `count` IDs with
    ///   a failure count ([`SnowflakeReply::Many`]).
    /// - `worker_id` absent: [`DEFAULT_WORKER_ID`]; present: only its low
    ///   10 bits take effect.
    ///
    /// # Errors
    ///
    /// Single issuance surfaces [`Error::ClockRegression`] and
    /// [`Error::WaitTimeout`] directly; batch issuance only fails outright
    /// on [`Error::LockPoisoned`].
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self)))]
    pub fn request_snowflake(
        &self,
        count: Option<u64>,
        worker_id: Option<u64>,
    ) -> Result<SnowflakeReply> {
        match count {
            Some(count) if count > 1 => Ok(SnowflakeReply::Many(self.next_batch(count, worker_id)?)),
            _ => Ok(SnowflakeReply::One(self.next_id(worker_id)?)),
        }
    }

    /// Delegates to the platform's native random UUID generator.
    ///
    /// - `count` absent or at most 1: a single canonical 36-character
    ///   hyphenated string.
    /// - `count` greater than 1: an ordered list of exactly `count` strings.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self)))]
    pub fn request_uuid(&self, count: Option<u64>) -> UuidReply {
        match count {
            Some(count) if count > 1 => {
                UuidReply::Many((0..count).map(|_| native_uuid()).collect())
            }
            _ => UuidReply::One(native_uuid()),
        }
    }
}
