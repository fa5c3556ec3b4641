//! Line-oriented channel to the game server.

use crate::error::TransportError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tracing::{debug, info, instrument, trace};

/// A bidirectional channel of newline-terminated text.
#[async_trait::async_trait]
pub trait LineChannel: Send {
    /// Sends one line; the terminator is appended by the channel.
    async fn write_line(&mut self, line: &str) -> Result<(), TransportError>;

    /// Reads the next line without its terminator.
    ///
    /// Returns `Ok(None)` once the peer has closed the stream.
    async fn read_line(&mut self) -> Result<Option<String>, TransportError>;
}

/// [`LineChannel`] over any buffered reader and writer pair.
pub struct StreamLineChannel<R, W> {
    lines: Lines<R>,
    writer: W,
}

impl<R, W> StreamLineChannel<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Wraps the two halves of a stream.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            lines: reader.lines(),
            writer,
        }
    }
}

#[async_trait::async_trait]
impl<R, W> LineChannel for StreamLineChannel<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn write_line(&mut self, line: &str) -> Result<(), TransportError> {
        trace!(line, "-> server");
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        let line = self.lines.next_line().await?;
        match &line {
            Some(text) => trace!(line = %text, "<- server"),
            None => debug!("Server closed the stream"),
        }
        Ok(line)
    }
}

/// Channel over a TCP connection, split into independent read and write halves.
pub type TcpLineChannel = StreamLineChannel<BufReader<OwnedReadHalf>, OwnedWriteHalf>;

impl TcpLineChannel {
    /// Connects to the server at `host:port`.
    #[instrument]
    pub async fn connect(host: &str, port: u16) -> Result<Self, TransportError> {
        info!("Connecting to hangman server");
        let stream = TcpStream::connect((host, port)).await.map_err(|e| {
            TransportError::new(format!("Failed to connect to {}:{}: {}", host, port, e))
        })?;
        let (read_half, write_half) = stream.into_split();
        info!("Connected");
        Ok(Self::new(BufReader::new(read_half), write_half))
    }
}
