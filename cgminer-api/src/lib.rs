//! Client for the cgminer/bmminer JSON API spoken by Antminer firmware.
//!
//! ```no_run
//! # async fn run() -> cgminer_api::Result<()> {
//! let client = cgminer_api::Client::new("10.0.0.17:4028");
//! let stats = client.stats().await?.s9();
//! println!("{} GH/s on {}", stats.ghs_5s, stats.miner_type);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod command;
pub mod connection;
pub mod error;
pub mod response;
pub mod stats;
pub mod status;
pub mod tracing;
pub mod transport;
pub mod types;

pub use client::{Client, ClientConfig};
pub use command::Command;
pub use error::{ConnectError, Error, Result};
pub use stats::{GenericStats, StatsD3, StatsL3, StatsS7, StatsS9, StatsT9};
pub use status::{ApiError, Severity, StatusEntry};
pub use types::{Device, DeviceDetail, Number, NumberError, Pool, Summary, Version};
