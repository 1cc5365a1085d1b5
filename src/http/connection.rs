use bytes::BytesMut;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::files::StaticHandler;
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

const READ_CHUNK: usize = 1024;

/// Drives one connection through a single read-respond-close exchange.
///
/// Malformed input is dropped without writing anything back: the one
/// terminal "state" that produces no response. There is no keep-alive;
/// closing the connection is also what delimits the response body for
/// clients that ignore Content-Length.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    state: ConnectionState,
    handler: StaticHandler,
    read_timeout: Duration,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, handler: StaticHandler, read_timeout_secs: u64) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
            handler,
            read_timeout: Duration::from_secs(read_timeout_secs),
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        None => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let req = req.clone();
                    let response = self.handler.handle(&req).await;

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    // Single-shot model: one request per connection.
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until a full request head is buffered.
    ///
    /// Returns `None` when no response should be sent: client closed or
    /// went quiet, or the bytes never formed a valid request head.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            match parse_request(&self.buffer) {
                Ok((request, consumed)) => {
                    let _ = self.buffer.split_to(consumed);
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    tracing::debug!(error = ?e, "malformed request, dropping connection");
                    return Ok(None);
                }
            }

            // Read more data, but never wait forever on a quiet client
            let mut temp = [0u8; READ_CHUNK];
            let n = match timeout(self.read_timeout, self.stream.read(&mut temp)).await {
                Ok(res) => res?,
                Err(_) => {
                    tracing::debug!("read timed out, dropping connection");
                    return Ok(None);
                }
            };

            if n == 0 {
                // Client closed. A partial head at EOF is malformed input
                // and gets no reply.
                if !self.buffer.is_empty() {
                    tracing::debug!("truncated request at EOF, dropping connection");
                }
                return Ok(None);
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }
}
