//! HTTP protocol implementation.
//!
//! This module implements the server half of HTTP/1.x for a single request:
//! one request is parsed from the input stream, routed by method, and answered
//! with exactly one response before the caller exits.
//!
//! # Architecture
//!
//! - **`connection`**: the per-invocation handler implementing the
//!   method-dispatch state machine
//! - **`parser`**: reads an HTTP request from a byte stream
//! - **`request`**: parsed request representation
//! - **`headers`**: ordered header store with case-insensitive lookup
//! - **`response`**: status codes and generated HTML error pages
//! - **`writer`**: serializes response headers and streams bodies to the client
//! - **`mime`**: content-type guessing based on file extensions
//!
//! # Dispatch
//!
//! ```text
//!        ┌─────────────┐
//!        │   Parsing   │ ← Read request line, headers, body
//!        └──────┬──────┘
//!               │ Request parsed
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Route on method
//!        └──────┬───────────┘
//!               ├─ GET/HEAD → file response (200 or 404)
//!               ├─ POST     → 405 Method Not Allowed
//!               └─ other    → 501 Not Implemented
//! ```
//!
//! Every response closes the connection (`Connection: close`); there is no
//! keep-alive and no second request.

pub mod connection;
pub mod headers;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
