mod error;
mod generator;
mod id;
#[cfg(feature = "serde")]
mod serde;
mod service;
mod time;
mod uuid_native;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::service::*;
pub use crate::time::*;
pub use crate::uuid_native::*;
