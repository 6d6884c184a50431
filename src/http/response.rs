/// HTTP status codes this server can emit.
///
/// - `Ok` (200): file served
/// - `NotFound` (404): no regular file at the resolved path
/// - `MethodNotAllowed` (405): POST
/// - `NotImplemented` (501): any other method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::NotImplemented => 501,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// Generated HTML page for an error response. The 405 and 501 pages name the
/// offending method.
pub fn error_page(status: StatusCode, method: &str) -> String {
    let detail = match status {
        StatusCode::NotFound => "File not found".to_string(),
        StatusCode::MethodNotAllowed => {
            format!("The request method {method} is not allowed")
        }
        StatusCode::NotImplemented => {
            format!("The request method {method} is not implemented")
        }
        StatusCode::Ok => String::new(),
    };
    format!(
        "<html>\r\n<head><title>{} {}</title></head>\r\n<body><p>{detail}</p></body>\r\n</html>\r\n",
        status.as_u16(),
        status.reason_phrase()
    )
}
