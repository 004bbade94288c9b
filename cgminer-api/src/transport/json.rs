//! JSON transport.

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::trace;

use super::{Transport, frame, repair};
use crate::command::Command;
use crate::error::Result;

/// The JSON flavour of the API.
///
/// Requests are bare JSON objects; responses are JSON objects ending in a
/// zero byte or end of stream. Responses to `stats` are repaired before they
/// are handed back, see [`repair`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTransport;

impl JsonTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transport for JsonTransport {
    async fn send_command(
        &self,
        writer: &mut (dyn AsyncWrite + Unpin + Send),
        command: &Command,
    ) -> Result<()> {
        let request = command.encode()?;
        trace!(tx = %String::from_utf8_lossy(&request), "Sending command");

        writer.write_all(&request).await?;
        writer.flush().await?;

        Ok(())
    }

    async fn read_response(
        &self,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        command: &Command,
    ) -> Result<Vec<u8>> {
        let payload = frame::read_frame(reader).await?;
        trace!(rx = %String::from_utf8_lossy(&payload), "Received response");

        if repair::needs_repair(command.name()) {
            Ok(repair::merge_objects(payload))
        } else {
            Ok(payload)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn writes_request_without_terminator() {
        let (mut client, mut server) = tokio::io::duplex(256);

        let cmd = Command::with_parameter(command::SWITCHPOOL, "1");
        JsonTransport.send_command(&mut client, &cmd).await.unwrap();
        drop(client);

        let mut received = Vec::new();
        server.read_to_end(&mut received).await.unwrap();
        assert_eq!(received, br#"{"command":"switchpool","parameter":"1"}"#);
    }

    #[tokio::test]
    async fn repairs_stats_only() {
        let body = b"{\"STATS\":0}{\"id\":1}\0";

        let (mut server, mut client) = tokio::io::duplex(256);
        server.write_all(body).await.unwrap();
        let payload = JsonTransport
            .read_response(&mut client, &Command::new(command::STATS))
            .await
            .unwrap();
        assert_eq!(payload, br#"{"STATS":0,"id":1}"#);

        let (mut server, mut client) = tokio::io::duplex(256);
        server.write_all(body).await.unwrap();
        let payload = JsonTransport
            .read_response(&mut client, &Command::new(command::SUMMARY))
            .await
            .unwrap();
        assert_eq!(payload, br#"{"STATS":0}{"id":1}"#);
    }
}
