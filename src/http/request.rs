use crate::http::headers::HeaderMap;

/// Represents a parsed HTTP request from a client.
///
/// Contains the information extracted from the HTTP request line and headers.
/// The method is kept as a plain string rather than an enum so unknown
/// methods survive parsing and can be answered with 405 Method Not Allowed
/// instead of killing the connection. This is a GET-only server, so request
/// bodies are never read.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: String,
    /// The request path in origin form (e.g., "/index.html")
    pub path: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Request headers
    pub headers: HeaderMap,
}

impl Request {
    /// Retrieves a header value by name (case-insensitive).
    ///
    /// # Arguments
    ///
    /// * `key` - Header name to look up
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the header value if present, `None` otherwise.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }

    /// Whether this request can be served at all. Anything other than GET
    /// ends in 405.
    pub fn is_get(&self) -> bool {
        self.method == "GET"
    }
}
