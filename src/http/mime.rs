//! Content-type guessing based on file extensions.

use std::path::Path;

/// Default content-type guesser.
///
/// Unknown or missing extensions fall back to `text/plain`. The dispatcher
/// accepts any replacement with this signature, see
/// [`serve_with`](crate::http::connection::serve_with).
pub fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("pdf") => "application/pdf",
        _ => "text/plain",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(guess_content_type(Path::new("/srv/index.html")), "text/html");
        assert_eq!(guess_content_type(Path::new("a.css")), "text/css");
        assert_eq!(guess_content_type(Path::new("a.json")), "application/json");
        assert_eq!(guess_content_type(Path::new("a.png")), "image/png");
    }

    #[test]
    fn test_unknown_extension_falls_back_to_text_plain() {
        assert_eq!(guess_content_type(Path::new("README")), "text/plain");
        assert_eq!(guess_content_type(Path::new("data.xyz")), "text/plain");
    }
}
