//! Records returned by the miner API.
//!
//! One module per command family. Every record derives `Default` and uses
//! `#[serde(default)]`, so fields a particular firmware omits decode as zero
//! values instead of failing the whole response. Fields whose encoding
//! differs between firmware builds use [`Number`].
//!
//! Stats records are large enough to live in their own module, see
//! [`crate::stats`].

mod device;
mod number;
mod pool;
mod summary;
mod version;

pub use device::{Device, DeviceDetail};
pub use number::{Number, NumberError};
pub use pool::Pool;
pub use summary::Summary;
pub use version::Version;
