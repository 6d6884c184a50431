use std::path::PathBuf;

use oneshotd::files::FileInfo;
use oneshotd::http::response::{StatusCode, error_page};
use oneshotd::http::writer::ResponseWriter;

fn scratch_docroot(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("oneshotd-writer-{}-{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Splits raw response bytes into (head, body) at the blank line.
fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let pos = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("no header terminator in response");
    let head = String::from_utf8(raw[..pos].to_vec()).unwrap();
    (head, raw[pos + 4..].to_vec())
}

#[test]
fn test_status_code_numeric_values() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
    assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
}

#[test]
fn test_status_code_reason_phrases() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(StatusCode::MethodNotAllowed.reason_phrase(), "Method Not Allowed");
    assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
}

#[test]
fn test_error_pages_name_the_method() {
    let page = error_page(StatusCode::MethodNotAllowed, "POST");
    assert!(page.contains("405 Method Not Allowed"));
    assert!(page.contains("The request method POST is not allowed"));

    let page = error_page(StatusCode::NotImplemented, "PATCH");
    assert!(page.contains("501 Not Implemented"));
    assert!(page.contains("The request method PATCH is not implemented"));

    let page = error_page(StatusCode::NotFound, "GET");
    assert!(page.contains("File not found"));
}

#[tokio::test]
async fn test_common_header_block() {
    let mut out: Vec<u8> = Vec::new();
    let mut writer = ResponseWriter::new(&mut out);
    let page = error_page(StatusCode::NotFound, "GET");
    writer.send_html(StatusCode::NotFound, &page, false).await.unwrap();

    let (head, body) = split_response(&out);
    let mut lines = head.lines();

    assert_eq!(lines.next().unwrap(), "HTTP/1.0 404 Not Found");
    let rest: Vec<&str> = lines.collect();
    assert!(rest.iter().any(|l| l.starts_with("Date: ") && l.ends_with(" GMT")));
    assert!(rest.iter().any(|l| l.starts_with("Server: oneshotd/")));
    assert!(rest.contains(&"Connection: close"));
    assert!(rest.contains(&"Content-Type: text/html"));
    assert_eq!(body, page.as_bytes());
}

#[tokio::test]
async fn test_html_body_suppressed_for_head() {
    let mut out: Vec<u8> = Vec::new();
    let mut writer = ResponseWriter::new(&mut out);
    let page = error_page(StatusCode::NotFound, "HEAD");
    writer.send_html(StatusCode::NotFound, &page, true).await.unwrap();

    let (head, body) = split_response(&out);
    assert!(head.starts_with("HTTP/1.0 404 Not Found"));
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_send_file_streams_contents() {
    let root = scratch_docroot("send");
    let content = vec![b'z'; 2500]; // more than two streaming blocks
    std::fs::write(root.join("big.txt"), &content).unwrap();

    let info = FileInfo {
        path: root.join("big.txt"),
        size: 2500,
        ok: true,
    };

    let mut out: Vec<u8> = Vec::new();
    let mut writer = ResponseWriter::new(&mut out);
    writer.send_file(&info, "text/plain", false).await.unwrap();

    let (head, body) = split_response(&out);
    assert!(head.starts_with("HTTP/1.0 200 OK"));
    assert!(head.contains("Content-Length: 2500"));
    assert!(head.contains("Content-Type: text/plain"));
    assert_eq!(body, content);
}

#[tokio::test]
async fn test_send_file_head_writes_no_body_bytes() {
    let root = scratch_docroot("send-head");
    std::fs::write(root.join("f.txt"), b"content").unwrap();

    let info = FileInfo {
        path: root.join("f.txt"),
        size: 7,
        ok: true,
    };

    let mut out: Vec<u8> = Vec::new();
    let mut writer = ResponseWriter::new(&mut out);
    writer.send_file(&info, "text/plain", true).await.unwrap();

    let (head, body) = split_response(&out);
    assert!(head.contains("Content-Length: 7"));
    assert!(body.is_empty());
}
