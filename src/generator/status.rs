use crate::Uid64;

/// Represents the outcome of a single, non-blocking issuance attempt.
///
/// - [`IdGenStatus::Ready`] indicates a new ID was issued.
/// - [`IdGenStatus::Pending`] means the 12-bit sequence space for the
///   current millisecond is exhausted; no ID can be issued until the clock
///   advances past the current tick.
///
/// This allows non-blocking generation loops and clean backoff strategies:
/// callers decide whether to spin, yield, or sleep.
///
/// # Example
///
/// ```
/// use uid64::{BasicUidGenerator, IdGenStatus, TimeSource, Uid64};
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1
///     }
/// }
///
/// let generator = BasicUidGenerator::from_components(1, 0, Uid64::max_sequence(), FixedTime);
/// match generator.try_poll_id().unwrap() {
///     IdGenStatus::Ready { id } => println!("ID: {id}"),
///     IdGenStatus::Pending { yield_for } => println!("back off for {yield_for} ms"),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdGenStatus {
    /// A unique ID was issued and is ready to use.
    Ready { id: Uid64 },
    /// No ID could be issued because the sequence is exhausted for the
    /// current tick.
    Pending {
        /// Suggested backoff, in milliseconds, before polling again.
        yield_for: u64,
    },
}
