use crate::http::headers::HeaderMap;
use crate::http::request::Request;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// No CRLF-CRLF separator yet; caller may read more bytes.
    Incomplete,
    /// Request line did not split into exactly method, path, version.
    InvalidRequestLine,
    /// A header line had no `:` separator.
    InvalidHeader,
    /// Request head was not valid UTF-8.
    InvalidEncoding,
}

/// Parses an HTTP/1.1 request head from a raw byte buffer.
///
/// Returns the request and the number of bytes consumed (the head including
/// the blank line). Bodies are never parsed. `Incomplete` means the blank
/// line has not arrived yet; every other error means the input is malformed
/// and the connection should be dropped without a response.
pub fn parse_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let head_end = find_head_end(buf).ok_or(ParseError::Incomplete)?;
    let head_bytes = &buf[..head_end];

    let head = std::str::from_utf8(head_bytes).map_err(|_| ParseError::InvalidEncoding)?;

    let mut lines = head.split("\r\n");

    // Request line: exactly three whitespace-separated tokens. Anything
    // else is treated as a parse failure, never a 400.
    let request_line = lines.next().ok_or(ParseError::InvalidRequestLine)?;
    let tokens: Vec<&str> = request_line.split_whitespace().collect();
    let [method, path, version] = tokens[..] else {
        return Err(ParseError::InvalidRequestLine);
    };

    // Headers: "Name: value", trimmed, duplicates last-one-wins.
    let mut headers = HeaderMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;

        headers.insert(key.trim(), value.trim());
    }

    let request = Request {
        method: method.to_string(),
        path: path.to_string(),
        version: version.to_string(),
        headers,
    };

    Ok((request, head_end + 4))
}

fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
