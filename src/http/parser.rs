use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::http::headers::HeaderMap;
use crate::http::request::Request;

/// Capacity of the line buffer for the request line and each header line.
pub const LINE_BUF_SIZE: usize = 4096;

/// Upper bound on a declared request body.
pub const MAX_REQUEST_BODY_LENGTH: u64 = 1024 * 1024;

const PROTO_PREFIX: &str = "HTTP/1.";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing request line")]
    MissingRequestLine,
    #[error("line exceeds {LINE_BUF_SIZE} bytes")]
    LineTooLong,
    #[error("request is not valid UTF-8")]
    InvalidUtf8,
    #[error("parse error in request line (no path): {0:?}")]
    MissingPath(String),
    #[error("parse error in request line (no protocol): {0:?}")]
    MissingProtocol(String),
    #[error("unsupported protocol: {0:?}")]
    UnsupportedProtocol(String),
    #[error("unexpected end of stream while reading headers")]
    UnexpectedEof,
    #[error("parse error in header line: {0:?}")]
    MalformedHeader(String),
    #[error("invalid Content-Length value: {0:?}")]
    InvalidContentLength(String),
    #[error("request body of {0} bytes exceeds the {MAX_REQUEST_BODY_LENGTH} byte limit")]
    BodyTooLarge(u64),
    #[error("request body shorter than its declared Content-Length")]
    TruncatedBody,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reads one complete HTTP/1.x request from the stream.
///
/// Consumes exactly the bytes of the request (line, headers, declared body)
/// and nothing more. No partial request is ever returned: the result is a
/// fully populated [`Request`] or a [`ParseError`] describing the first
/// defect encountered.
pub async fn read_request<R>(reader: &mut R) -> Result<Request, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let line = read_line(reader)
        .await?
        .ok_or(ParseError::MissingRequestLine)?;
    let (minor_version, method, path) = parse_request_line(&line)?;

    let headers = read_headers(reader).await?;

    let length = content_length(&headers)?;
    if length > MAX_REQUEST_BODY_LENGTH {
        return Err(ParseError::BodyTooLarge(length));
    }
    let body = if length > 0 {
        Some(read_body(reader, length as usize).await?)
    } else {
        None
    };

    Ok(Request {
        minor_version,
        method,
        path,
        headers,
        body,
    })
}

/// Reads one line, accepting `\r\n` or bare `\n` and stripping the
/// terminator. Returns `None` at EOF. A line that fills the buffer without a
/// terminator is an error; a terminator-less final line before EOF is kept.
async fn read_line<R>(reader: &mut R) -> Result<Option<String>, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut raw = Vec::new();
    let n = (&mut *reader)
        .take(LINE_BUF_SIZE as u64)
        .read_until(b'\n', &mut raw)
        .await?;
    if n == 0 {
        return Ok(None);
    }
    if raw.ends_with(b"\n") {
        raw.pop();
        if raw.ends_with(b"\r") {
            raw.pop();
        }
    } else if n == LINE_BUF_SIZE {
        return Err(ParseError::LineTooLong);
    }
    String::from_utf8(raw)
        .map(Some)
        .map_err(|_| ParseError::InvalidUtf8)
}

/// Splits `METHOD SP PATH SP HTTP/1.<minor>` into its parts.
///
/// The method is ASCII-uppercased. The protocol token must start with
/// `HTTP/1.` (case-insensitive); a suffix that is not entirely numeric parses
/// as minor version 0.
fn parse_request_line(line: &str) -> Result<(u32, String, String), ParseError> {
    let (method, rest) = line
        .split_once(' ')
        .ok_or_else(|| ParseError::MissingPath(line.to_string()))?;
    let (path, protocol) = rest
        .split_once(' ')
        .ok_or_else(|| ParseError::MissingProtocol(line.to_string()))?;

    let prefix = protocol.get(..PROTO_PREFIX.len());
    if !prefix.is_some_and(|p| p.eq_ignore_ascii_case(PROTO_PREFIX)) {
        return Err(ParseError::UnsupportedProtocol(protocol.to_string()));
    }
    let minor_version = protocol[PROTO_PREFIX.len()..].parse().unwrap_or(0);

    Ok((minor_version, method.to_ascii_uppercase(), path.to_string()))
}

/// Reads header lines until the blank line ending the header block.
///
/// Names keep their case; values lose leading spaces and tabs. Duplicate
/// names are kept; precedence is decided by the store (last on wire wins).
async fn read_headers<R>(reader: &mut R) -> Result<HeaderMap, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut headers = HeaderMap::new();
    loop {
        let line = read_line(reader).await?.ok_or(ParseError::UnexpectedEof)?;
        if line.is_empty() {
            return Ok(headers);
        }
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| ParseError::MalformedHeader(line.clone()))?;
        headers.insert(name, value.trim_start_matches([' ', '\t']));
    }
}

/// Declared body length: absent `Content-Length` means 0; non-numeric or
/// negative values are hard errors.
fn content_length(headers: &HeaderMap) -> Result<u64, ParseError> {
    match headers.get("Content-Length") {
        None => Ok(0),
        Some(raw) => {
            let n: i64 = raw
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidContentLength(raw.to_string()))?;
            u64::try_from(n).map_err(|_| ParseError::InvalidContentLength(raw.to_string()))
        }
    }
}

async fn read_body<R>(reader: &mut R, length: usize) -> Result<Vec<u8>, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut body = vec![0u8; length];
    reader.read_exact(&mut body).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            ParseError::TruncatedBody
        } else {
            ParseError::Io(e)
        }
    })?;
    Ok(body)
}
