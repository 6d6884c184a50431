//! Maps request paths to filesystem locations under the document root.

use std::path::{Path, PathBuf};

/// Resolved-file metadata for one response.
///
/// `size` is meaningful only when `ok` is true. `ok` is true only for an
/// existing regular file; directories, special files, and symlinks (which are
/// inspected without being followed) all resolve to not-ok.
#[derive(Debug, Clone)]
pub struct FileInfo {
    pub path: PathBuf,
    pub size: u64,
    pub ok: bool,
}

/// Resolves a request path against the document root.
///
/// Never fails: a missing, non-regular, or root-escaping path yields
/// `ok = false`, which the caller turns into a 404.
pub async fn resolve(docroot: &Path, request_path: &str) -> FileInfo {
    let Some(relative) = contain(request_path) else {
        return FileInfo {
            path: docroot.join(request_path.trim_start_matches('/')),
            size: 0,
            ok: false,
        };
    };
    let path = docroot.join(relative);
    match tokio::fs::symlink_metadata(&path).await {
        Ok(meta) if meta.file_type().is_file() => FileInfo {
            path,
            size: meta.len(),
            ok: true,
        },
        _ => FileInfo {
            path,
            size: 0,
            ok: false,
        },
    }
}

/// Lexically normalizes the request path into a relative path that stays
/// under the document root. `.` segments and empty segments are dropped,
/// `..` pops; a `..` with nothing left to pop escapes the root and rejects
/// the whole path.
fn contain(request_path: &str) -> Option<PathBuf> {
    let mut kept: Vec<&str> = Vec::new();
    for segment in request_path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                kept.pop()?;
            }
            s => kept.push(s),
        }
    }
    Some(kept.iter().collect())
}
