//! Response framing.
//!
//! Firmware ends a response with a single zero byte, but not reliably: some
//! builds simply close the socket instead. Both must work.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Frame terminator.
pub const TERMINATOR: u8 = 0x00;

/// Read one response frame.
///
/// Reads until [`TERMINATOR`] or end of stream and returns everything read
/// with trailing terminators removed. End of stream is not an error; a
/// stream that closes immediately yields an empty frame.
pub async fn read_frame<R>(reader: R) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut frame = Vec::with_capacity(4096);
    reader.read_until(TERMINATOR, &mut frame).await?;

    while frame.last() == Some(&TERMINATOR) {
        frame.pop();
    }

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn stops_at_terminator() {
        let (mut server, mut client) = tokio::io::duplex(64);
        server.write_all(b"{\"id\":1}\0trailing").await.unwrap();

        let frame = read_frame(&mut client).await.unwrap();
        assert_eq!(frame, b"{\"id\":1}");
    }

    #[tokio::test]
    async fn accepts_unterminated_response() {
        let (mut server, mut client) = tokio::io::duplex(64);
        server.write_all(b"{\"id\":1}").await.unwrap();
        drop(server);

        let frame = read_frame(&mut client).await.unwrap();
        assert_eq!(frame, b"{\"id\":1}");
    }

    #[tokio::test]
    async fn closed_stream_is_empty_frame() {
        let (server, mut client) = tokio::io::duplex(64);
        drop(server);

        let frame = read_frame(&mut client).await.unwrap();
        assert!(frame.is_empty());
    }

    #[tokio::test]
    async fn frame_larger_than_buffer() {
        let (mut server, mut client) = tokio::io::duplex(16);
        let body = vec![b'x'; 10_000];
        let expected = body.clone();

        tokio::spawn(async move {
            server.write_all(&body).await.unwrap();
            server.write_all(&[TERMINATOR]).await.unwrap();
        });

        let frame = read_frame(&mut client).await.unwrap();
        assert_eq!(frame, expected);
    }
}
