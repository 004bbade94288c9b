//! Per-call TCP connections.
//!
//! The API serves one request per connection, so every call dials, exchanges
//! a single request/response, and closes. [`Connection`] is consumed by the
//! exchange, which makes closing unconditional: the socket is dropped on
//! return, on error, and when the calling future is dropped mid-flight.
//!
//! The timeout is applied twice, once to the dial and once as a single
//! deadline covering the whole write and read. Both waits also give up as
//! soon as the shutdown token fires.

use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::{Instant, timeout, timeout_at};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::command::Command;
use crate::error::{ConnectError, Error, Result};
use crate::response::Response;
use crate::transport::{self, Transport};

/// An open connection to the miner API, good for one exchange.
pub struct Connection {
    stream: TcpStream,
    timeout: Duration,
    shutdown: CancellationToken,
}

impl Connection {
    /// Dial `addr` (`host:port`).
    ///
    /// Fails with [`Error::Connect`] if the dial is refused, does not
    /// complete within `timeout`, or `shutdown` is cancelled first.
    pub async fn connect(
        addr: &str,
        timeout_dur: Duration,
        shutdown: CancellationToken,
    ) -> Result<Self> {
        debug!(addr = %addr, "Connecting to miner");

        let stream = dial(TcpStream::connect(addr), timeout_dur, &shutdown)
            .await
            .map_err(|source| Error::Connect {
                addr: addr.to_string(),
                source,
            })?;

        debug!("Connected to miner");

        Ok(Self {
            stream,
            timeout: timeout_dur,
            shutdown,
        })
    }

    /// Send `command` and decode the response into `R`.
    pub async fn execute<R: Response>(
        mut self,
        transport: &dyn Transport,
        command: &Command,
    ) -> Result<R> {
        let deadline = Instant::now() + self.timeout;
        within(
            deadline,
            &self.shutdown,
            transport::execute(transport, &mut self.stream, command),
        )
        .await
    }

    /// Send `command` and status-check whatever comes back.
    pub async fn execute_discard(
        mut self,
        transport: &dyn Transport,
        command: &Command,
    ) -> Result<()> {
        let deadline = Instant::now() + self.timeout;
        within(
            deadline,
            &self.shutdown,
            transport::execute_discard(transport, &mut self.stream, command),
        )
        .await
    }
}

/// Wait for `connect` for at most `timeout_dur`, or until `shutdown` fires.
async fn dial<F, S>(
    connect: F,
    timeout_dur: Duration,
    shutdown: &CancellationToken,
) -> std::result::Result<S, ConnectError>
where
    F: Future<Output = std::io::Result<S>>,
{
    tokio::select! {
        biased;

        _ = shutdown.cancelled() => Err(ConnectError::Cancelled),

        result = timeout(timeout_dur, connect) => match result {
            Ok(Ok(stream)) => Ok(stream),
            Ok(Err(e)) => Err(ConnectError::Io(e)),
            Err(_) => Err(ConnectError::Timeout),
        },
    }
}

/// Run `fut` until `deadline`, or until `shutdown` fires.
async fn within<F, T>(deadline: Instant, shutdown: &CancellationToken, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;

        _ = shutdown.cancelled() => Err(Error::Cancelled),

        result = timeout_at(deadline, fut) => result.unwrap_or_else(|_| Err(Error::Timeout)),
    }
}
