//! Error types for the miner API client.

use thiserror::Error;

use crate::status::ApiError;

/// Miner API errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Could not establish the TCP connection
    #[error("connection to {addr} failed: {source}")]
    Connect {
        addr: String,
        #[source]
        source: ConnectError,
    },

    /// Network I/O error after the connection was established
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Request/response round trip exceeded its deadline
    #[error("timeout waiting for response")]
    Timeout,

    /// Shutdown requested while a request was in flight
    #[error("request cancelled")]
    Cancelled,

    /// Response could not be decoded into the expected envelope
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Singleton command returned zero or several records
    #[error("expected exactly one {key} record, got {count}")]
    Cardinality { key: &'static str, count: usize },

    /// Device reported an error or fatal status
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Command cannot be encoded
    #[error("invalid command: {0}")]
    InvalidCommand(String),
}

impl Error {
    /// True if the failure happened before a connection existed.
    ///
    /// Callers that implement their own retry policy can use this to tell a
    /// device that is down apart from one that answered badly.
    pub fn is_connect(&self) -> bool {
        matches!(self, Error::Connect { .. })
    }
}

/// Reasons a dial can fail.
#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("timed out")]
    Timeout,

    #[error("cancelled")]
    Cancelled,
}

/// Convenient Result type for miner API operations.
pub type Result<T> = std::result::Result<T, Error>;
