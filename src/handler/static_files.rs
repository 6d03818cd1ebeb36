//! Static file serving module
//!
//! Resolves a request path to a file under the route root and produces
//! exactly one response: the file's bytes, a 404 naming the path, or a 403
//! when the path escapes the root.

use crate::handler::router::RequestContext;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Serve the file the request path points at.
pub async fn serve_path(ctx: &RequestContext<'_>, root: &Path) -> Response<Full<Bytes>> {
    let Some(candidate) = resolve_candidate(root, ctx.path) else {
        logger::log_warning(&format!("Path traversal attempt blocked: {}", ctx.path));
        if ctx.access_log {
            logger::log_response(403, 0);
        }
        return http::build_forbidden_response();
    };

    match fs::read(&candidate).await {
        Ok(content) => {
            let content_type =
                mime::content_type_for(candidate.extension().and_then(|e| e.to_str()));
            if ctx.access_log {
                logger::log_response(200, content.len());
            }
            http::build_file_response(content, content_type)
        }
        // Missing, unreadable and is-a-directory all collapse to 404
        Err(_) => {
            if ctx.access_log {
                logger::log_response(404, 0);
            }
            http::build_not_found_response(ctx.path)
        }
    }
}

/// Join the request path onto the root and reject anything that escapes it.
///
/// Returns the normalized candidate path, or `None` when traversal left the
/// root. The check is lexical, not `canonicalize`-based, so a traversal to a
/// nonexistent location is still rejected rather than falling through to a
/// 404.
fn resolve_candidate(root: &Path, path: &str) -> Option<PathBuf> {
    let candidate = root.join(path.trim_start_matches('/'));
    let normalized = normalize(&candidate);
    normalized.starts_with(root).then_some(normalized)
}

/// Lexical path normalization: `.` is dropped, `..` pops the last component
/// and saturates at the filesystem root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
