use std::path::Path;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{info, warn};

use crate::files;
use crate::http::mime;
use crate::http::parser::{self, ParseError};
use crate::http::request::Request;
use crate::http::response::{self, StatusCode};
use crate::http::writer::ResponseWriter;

/// A fatal failure while serving the request.
///
/// These never become a client-visible HTTP error: a parse failure means no
/// response is written at all, and a write failure leaves whatever headers
/// were already flushed as a truncated response. The caller logs the error
/// and exits non-zero.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to read request: {0}")]
    Parse(#[from] ParseError),
    #[error("failed to write response: {0}")]
    Io(#[from] std::io::Error),
}

/// Serves exactly one request: parses it from `reader`, routes it by method,
/// and writes one complete response to `writer`.
pub async fn serve<R, W>(reader: R, writer: W, docroot: &Path) -> Result<(), ServiceError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    serve_with(reader, writer, docroot, mime::guess_content_type).await
}

/// Like [`serve`], with a caller-supplied content-type guesser.
pub async fn serve_with<R, W, G>(
    mut reader: R,
    writer: W,
    docroot: &Path,
    guess: G,
) -> Result<(), ServiceError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    G: Fn(&Path) -> &'static str,
{
    let req = parser::read_request(&mut reader).await?;
    info!("{} {}", req.method, req.path);

    let mut out = ResponseWriter::new(writer);
    let is_head = req.method == "HEAD";

    match req.method.as_str() {
        "GET" | "HEAD" => file_response(&req, &mut out, docroot, &guess).await?,
        "POST" => error_response(&req, &mut out, StatusCode::MethodNotAllowed, is_head).await?,
        _ => error_response(&req, &mut out, StatusCode::NotImplemented, is_head).await?,
    }
    Ok(())
}

async fn file_response<W, G>(
    req: &Request,
    out: &mut ResponseWriter<W>,
    docroot: &Path,
    guess: &G,
) -> Result<(), ServiceError>
where
    W: AsyncWrite + Unpin,
    G: Fn(&Path) -> &'static str,
{
    let is_head = req.method == "HEAD";
    let info = files::resolve(docroot, &req.path).await;
    if !info.ok {
        warn!("{} does not resolve to a regular file", req.path);
        return error_response(req, out, StatusCode::NotFound, is_head).await;
    }
    out.send_file(&info, guess(&info.path), is_head).await?;
    Ok(())
}

async fn error_response<W>(
    req: &Request,
    out: &mut ResponseWriter<W>,
    status: StatusCode,
    is_head: bool,
) -> Result<(), ServiceError>
where
    W: AsyncWrite + Unpin,
{
    let page = response::error_page(status, &req.method);
    out.send_html(status, &page, is_head).await?;
    Ok(())
}
