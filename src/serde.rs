use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Uid64;

/// Serializes as the raw `u64` representation.
impl Serialize for Uid64 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_raw().serialize(serializer)
    }
}

/// Deserializes from the raw `u64` representation.
///
/// Every 64-bit pattern decodes into a valid field layout, so this is total.
impl<'de> Deserialize<'de> for Uid64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Uid64::from_raw)
    }
}
