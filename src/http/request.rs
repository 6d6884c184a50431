use crate::http::headers::HeaderMap;

/// Represents a parsed HTTP request from a client.
///
/// Contains everything extracted from the request line, headers, and optional
/// body. The method is kept as a raw uppercased token rather than an enum so
/// that unrecognized methods still reach the dispatcher (and the 501 page)
/// with their original spelling.
#[derive(Debug, Clone)]
pub struct Request {
    /// Minor version from the request line (`HTTP/1.<minor>`)
    pub minor_version: u32,
    /// The HTTP method, ASCII-uppercased (e.g. "GET")
    pub method: String,
    /// The request path, verbatim from the request line (not URL-decoded)
    pub path: String,
    /// Request headers in wire order
    pub headers: HeaderMap,
    /// Request body; present iff the declared Content-Length was non-zero
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Retrieves a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Number of body bytes carried by this request.
    pub fn body_length(&self) -> usize {
        self.body.as_ref().map_or(0, Vec::len)
    }
}
