use std::io;

use bytes::BytesMut;
use chrono::Utc;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::files::FileInfo;
use crate::http::response::StatusCode;

/// The server always answers as HTTP/1.0, whatever the request claimed.
const HTTP_VERSION: &str = "HTTP/1.0";

const SERVER: &str = concat!("oneshotd/", env!("CARGO_PKG_VERSION"));

/// Block size for streaming file bodies.
const BLOCK_BUF_SIZE: usize = 1024;

/// Writes one response to the output stream.
///
/// Every response starts with the common header block: status line, `Date`
/// (RFC 1123, GMT), `Server`, and `Connection: close`. The stream is fully
/// flushed before any send method returns.
pub struct ResponseWriter<W> {
    out: W,
}

impl<W: AsyncWrite + Unpin> ResponseWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    async fn write_common_headers(&mut self, status: StatusCode) -> io::Result<()> {
        let date = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT");
        let head = format!(
            "{HTTP_VERSION} {} {}\r\nDate: {date}\r\nServer: {SERVER}\r\nConnection: close\r\n",
            status.as_u16(),
            status.reason_phrase()
        );
        self.out.write_all(head.as_bytes()).await
    }

    /// 200 response for a resolved file. The body is streamed from disk in
    /// fixed-size blocks; for HEAD only the headers are written. A mid-stream
    /// failure surfaces as an error with the headers already on the wire.
    pub async fn send_file(
        &mut self,
        info: &FileInfo,
        content_type: &str,
        head: bool,
    ) -> io::Result<()> {
        self.write_common_headers(StatusCode::Ok).await?;
        let entity_headers = format!(
            "Content-Length: {}\r\nContent-Type: {content_type}\r\n\r\n",
            info.size
        );
        self.out.write_all(entity_headers.as_bytes()).await?;

        if !head {
            let mut file = File::open(&info.path).await?;
            let mut buf = BytesMut::with_capacity(BLOCK_BUF_SIZE);
            loop {
                buf.clear();
                let n = file.read_buf(&mut buf).await?;
                if n == 0 {
                    break;
                }
                self.out.write_all(&buf).await?;
            }
        }
        self.out.flush().await
    }

    /// Error response carrying a generated HTML page. The page is omitted for
    /// HEAD; no Content-Length is emitted, `Connection: close` delimits it.
    pub async fn send_html(
        &mut self,
        status: StatusCode,
        page: &str,
        head: bool,
    ) -> io::Result<()> {
        self.write_common_headers(status).await?;
        self.out.write_all(b"Content-Type: text/html\r\n\r\n").await?;
        if !head {
            self.out.write_all(page.as_bytes()).await?;
        }
        self.out.flush().await
    }
}
