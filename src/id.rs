use core::fmt;

/// A packed, time-ordered 64-bit identifier.
///
/// The ID is packed from **MSB to LSB**:
///
/// ```text
///  Bit Index:  63              22 21          12 11            0
///              +------------------+-------------+---------------+
///  Field:      |  timestamp (42)  | worker (10) | sequence (12) |
///              +------------------+-------------+---------------+
///              |<------- MSB ------- 64 bits ------- LSB ------>|
/// ```
///
/// The timestamp field holds **raw milliseconds since the Unix epoch** with
/// no custom epoch shift, so `id >> 22` is directly comparable to wall-clock
/// time. 42 bits of milliseconds last until the year 2109.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uid64 {
    id: u64,
}

const _: () = {
    // Compile-time check: the three fields must cover the backing type
    // exactly, otherwise packing would alias.
    assert!(
        Uid64::TIMESTAMP_BITS + Uid64::WORKER_BITS + Uid64::SEQUENCE_BITS == u64::BITS as u64,
        "Uid64 layout does not cover the underlying integer type"
    );
};

impl Uid64 {
    pub const TIMESTAMP_BITS: u64 = 42;
    pub const WORKER_BITS: u64 = 10;
    pub const SEQUENCE_BITS: u64 = 12;

    pub const SEQUENCE_SHIFT: u64 = 0;
    pub const WORKER_SHIFT: u64 = Self::SEQUENCE_SHIFT + Self::SEQUENCE_BITS;
    pub const TIMESTAMP_SHIFT: u64 = Self::WORKER_SHIFT + Self::WORKER_BITS;

    pub const TIMESTAMP_MASK: u64 = (1 << Self::TIMESTAMP_BITS) - 1;
    pub const WORKER_MASK: u64 = (1 << Self::WORKER_BITS) - 1;
    pub const SEQUENCE_MASK: u64 = (1 << Self::SEQUENCE_BITS) - 1;

    /// Packs an ID from its components.
    ///
    /// Each component is silently masked to its field width: an out-of-range
    /// worker id contributes only its low 10 bits, never an error.
    pub const fn from_components(timestamp: u64, worker_id: u64, sequence: u64) -> Self {
        let t = (timestamp & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT;
        let w = (worker_id & Self::WORKER_MASK) << Self::WORKER_SHIFT;
        let s = (sequence & Self::SEQUENCE_MASK) << Self::SEQUENCE_SHIFT;
        Self { id: t | w | s }
    }

    /// Extracts the millisecond timestamp from the packed ID.
    pub const fn timestamp(&self) -> u64 {
        (self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK
    }

    /// Extracts the worker id from the packed ID.
    pub const fn worker_id(&self) -> u64 {
        (self.id >> Self::WORKER_SHIFT) & Self::WORKER_MASK
    }

    /// Extracts the sequence counter from the packed ID.
    pub const fn sequence(&self) -> u64 {
        (self.id >> Self::SEQUENCE_SHIFT) & Self::SEQUENCE_MASK
    }

    /// Maximum representable timestamp value.
    pub const fn max_timestamp() -> u64 {
        Self::TIMESTAMP_MASK
    }

    /// Maximum representable worker id.
    pub const fn max_worker_id() -> u64 {
        Self::WORKER_MASK
    }

    /// Maximum representable sequence value.
    pub const fn max_sequence() -> u64 {
        Self::SEQUENCE_MASK
    }

    /// Whether another ID can be issued within the current millisecond.
    pub const fn has_sequence_room(&self) -> bool {
        self.sequence() < Self::max_sequence()
    }

    /// Returns the state advanced by one sequence step within the same tick.
    pub const fn increment_sequence(&self) -> Self {
        Self::from_components(self.timestamp(), self.worker_id(), self.sequence() + 1)
    }

    /// Returns the state moved to a later tick with the sequence reset to 0.
    pub const fn rollover_to_timestamp(&self, timestamp: u64) -> Self {
        Self::from_components(timestamp, self.worker_id(), 0)
    }

    /// Converts this ID into its raw integer representation.
    pub const fn to_raw(&self) -> u64 {
        self.id
    }

    /// Converts a raw integer into an ID. Every bit pattern decodes.
    pub const fn from_raw(raw: u64) -> Self {
        Self { id: raw }
    }
}

impl fmt::Display for Uid64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for Uid64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uid64")
            .field("id", &format_args!("{} (0x{:x})", self.id, self.id))
            .field("timestamp", &self.timestamp())
            .field("worker_id", &self.worker_id())
            .field("sequence", &self.sequence())
            .finish()
    }
}

impl From<Uid64> for u64 {
    fn from(id: Uid64) -> Self {
        id.to_raw()
    }
}

impl From<u64> for Uid64 {
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_and_bounds() {
        let ts = Uid64::max_timestamp();
        let worker = Uid64::max_worker_id();
        let seq = Uid64::max_sequence();

        let id = Uid64::from_components(ts, worker, seq);
        assert_eq!(id.timestamp(), ts);
        assert_eq!(id.worker_id(), worker);
        assert_eq!(id.sequence(), seq);
        assert_eq!(id.to_raw(), u64::MAX);
    }

    #[test]
    fn raw_decode_matches_shift_and_mask() {
        let id = Uid64::from_components(1_725_000_000_000, 7, 93);
        let raw = id.to_raw();

        assert_eq!(raw >> 22, 1_725_000_000_000);
        assert_eq!((raw >> 12) & 0x3FF, 7);
        assert_eq!(raw & 0xFFF, 93);
        assert_eq!(Uid64::from_raw(raw), id);
    }

    #[test]
    fn out_of_range_components_are_masked() {
        // Worker ids wider than 10 bits keep only their low bits.
        let id = Uid64::from_components(42, 1024 + 7, 4096 + 5);
        assert_eq!(id.worker_id(), 7);
        assert_eq!(id.sequence(), 5);
        assert_eq!(id.timestamp(), 42);
    }

    #[test]
    fn low_bit_fields() {
        let id = Uid64::from_components(0, 0, 0);
        assert_eq!(id.to_raw(), 0);

        let id = Uid64::from_components(1, 1, 1);
        assert_eq!(id.timestamp(), 1);
        assert_eq!(id.worker_id(), 1);
        assert_eq!(id.sequence(), 1);
    }

    #[test]
    fn later_timestamp_orders_higher() {
        let a = Uid64::from_components(100, 1023, 4095);
        let b = Uid64::from_components(101, 0, 0);
        assert!(a < b);
    }

    #[test]
    fn state_transitions() {
        let id = Uid64::from_components(42, 9, 0);
        assert!(id.has_sequence_room());

        let next = id.increment_sequence();
        assert_eq!(next.timestamp(), 42);
        assert_eq!(next.worker_id(), 9);
        assert_eq!(next.sequence(), 1);

        let full = Uid64::from_components(42, 9, Uid64::max_sequence());
        assert!(!full.has_sequence_room());

        let rolled = full.rollover_to_timestamp(43);
        assert_eq!(rolled.timestamp(), 43);
        assert_eq!(rolled.worker_id(), 9);
        assert_eq!(rolled.sequence(), 0);
    }
}
