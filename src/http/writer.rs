use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const HTTP_VERSION: &str = "HTTP/1.1";

// RFC 7231 IMF-fixdate, e.g. "Thu, 27 Aug 2026 08:15:00 GMT".
const IMF_FIXDATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Formats `when` as an HTTP-date in GMT.
pub fn http_date(when: OffsetDateTime) -> String {
    // Formatting a complete timestamp against a fixed description cannot fail.
    when.format(&IMF_FIXDATE).unwrap_or_default()
}

/// Serializes a response to wire bytes: status line, Date header first,
/// then the response headers in their stored order, a blank line, and the
/// raw body.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    serialize_response_at(resp, OffsetDateTime::now_utc())
}

pub fn serialize_response_at(resp: &Response, when: OffsetDateTime) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Date always goes first
    buf.extend_from_slice(b"Date: ");
    buf.extend_from_slice(http_date(when).as_bytes());
    buf.extend_from_slice(b"\r\n");

    // Remaining headers in insertion order
    for (k, v) in resp.headers.iter() {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(&resp.body);

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
