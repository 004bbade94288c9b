//! Request/response exchange over one connection.
//!
//! A [`Transport`] knows how to put a [`Command`] on the wire and how to read
//! the matching response frame back. The free functions here drive one full
//! exchange on an already open stream: send, read, decode, status check.
//! Opening and closing the stream is the caller's business, see
//! [`crate::client`].
//!
//! Firmware can expose the API as JSON, plain text, or both. Only
//! [`JsonTransport`] is implemented; the trait is the seam for the other.

pub mod frame;
mod json;
pub mod repair;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::debug;

use crate::command::Command;
use crate::error::Result;
use crate::response::{GenericResponse, Response};
use crate::status::check_status;

pub use json::JsonTransport;

/// Wire encoding of the API.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Encode and write one command.
    async fn send_command(
        &self,
        writer: &mut (dyn AsyncWrite + Unpin + Send),
        command: &Command,
    ) -> Result<()>;

    /// Read the response to `command`, ready for JSON decoding.
    ///
    /// A stream that closes without sending anything yields an empty payload.
    async fn read_response(
        &self,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        command: &Command,
    ) -> Result<Vec<u8>>;
}

/// Run one exchange and decode the response into `R`.
pub async fn execute<R, S>(transport: &dyn Transport, stream: &mut S, command: &Command) -> Result<R>
where
    R: Response,
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    transport.send_command(&mut *stream, command).await?;
    let payload = transport.read_response(&mut *stream, command).await?;
    decode(&payload)
}

/// Run one exchange for a command whose payload the caller does not want.
///
/// Device errors still fail the call, but a missing or undecodable body does
/// not: control commands like `quit` may close the socket without answering,
/// and some firmware appends diagnostic text to the reply.
pub async fn execute_discard<S>(
    transport: &dyn Transport,
    stream: &mut S,
    command: &Command,
) -> Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    transport.send_command(&mut *stream, command).await?;
    let payload = transport.read_response(&mut *stream, command).await?;
    decode_discard(&payload)
}

/// Decode a payload into `R` and fail on device-reported errors.
pub fn decode<R: Response>(payload: &[u8]) -> Result<R> {
    let response: R = serde_json::from_slice(payload)?;
    check_status(response.status())?;
    Ok(response)
}

/// Status-check a payload if it decodes, accept it otherwise.
pub fn decode_discard(payload: &[u8]) -> Result<()> {
    if payload.is_empty() {
        return Ok(());
    }

    match serde_json::from_slice::<GenericResponse>(payload) {
        Ok(response) => Ok(check_status(&response.status)?),
        Err(e) => {
            debug!(error = %e, "Ignoring undecodable response");
            Ok(())
        }
    }
}
