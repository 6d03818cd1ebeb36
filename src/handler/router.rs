//! Request entry point module
//!
//! Derives the effective request path and dispatches to the static file
//! responder. The request method and body are deliberately ignored: every
//! request is answered through the same read path.

use crate::config::AppState;
use crate::handler::static_files;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response, Uri};
use std::convert::Infallible;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    /// Effective path, after the default-document rewrite
    pub path: &'a str,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling.
///
/// Generic over the body type; the body is never read, and tests construct
/// requests with `()` bodies.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let access_log = state.config.logging.access_log;
    let path = effective_path(req.uri(), &state.config.files.default_document);

    if access_log {
        logger::log_request(req.method().as_str(), &path);
    }

    let ctx = RequestContext {
        path: &path,
        access_log,
    };

    Ok(static_files::serve_path(&ctx, &state.root).await)
}

/// Rewrite `/` (or an empty path) to the default document.
///
/// `Uri::path()` already excludes everything from the first `?` onward.
fn effective_path(uri: &Uri, default_document: &str) -> String {
    let path = uri.path();
    if path.is_empty() || path == "/" {
        format!("/{default_document}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, FilesConfig, LoggingConfig, ServerConfig};
    use http_body_util::BodyExt;
    use std::path::Path;

    const DEFAULT_DOC: &str = "social-dashboard.html";

    #[test]
    fn test_effective_path_rewrites_root() {
        let uri: Uri = "/".parse().unwrap();
        assert_eq!(effective_path(&uri, DEFAULT_DOC), "/social-dashboard.html");
    }

    #[test]
    fn test_effective_path_excludes_query() {
        let uri: Uri = "/app.js?v=3".parse().unwrap();
        assert_eq!(effective_path(&uri, DEFAULT_DOC), "/app.js");
    }

    #[test]
    fn test_effective_path_passes_through() {
        let uri: Uri = "/assets/logo.png".parse().unwrap();
        assert_eq!(effective_path(&uri, DEFAULT_DOC), "/assets/logo.png");
    }

    #[test]
    fn test_root_with_query_still_rewrites() {
        let uri: Uri = "/?refresh=1".parse().unwrap();
        assert_eq!(effective_path(&uri, DEFAULT_DOC), "/social-dashboard.html");
    }

    fn temp_root(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "dashboard-devserver-router-{}-{tag}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("create temp root");
        dir
    }

    fn test_state(root: &Path) -> Arc<AppState> {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            logging: LoggingConfig { access_log: false },
            files: FilesConfig {
                root: root.to_string_lossy().into_owned(),
                default_document: DEFAULT_DOC.to_string(),
            },
        };
        Arc::new(AppState::new(&config).expect("temp root must canonicalize"))
    }

    #[tokio::test]
    async fn test_root_serves_default_document() {
        let root = temp_root("default-doc");
        std::fs::write(root.join(DEFAULT_DOC), b"<html>dashboard</html>").unwrap();
        let state = test_state(&root);

        let req = Request::builder().uri("/").body(()).unwrap();
        let resp = handle_request(req, Arc::clone(&state)).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html; charset=utf-8");
        let body = resp.into_body().collect().await.unwrap().to_bytes();

        // "/" must behave exactly like naming the default document
        let req = Request::builder().uri("/social-dashboard.html").body(()).unwrap();
        let resp = handle_request(req, state).await.unwrap();
        assert_eq!(resp.status(), 200);
        let explicit = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, explicit);
    }

    #[tokio::test]
    async fn test_traversal_request_is_forbidden() {
        let root = temp_root("traversal");
        let state = test_state(&root);

        let req = Request::builder()
            .uri("http://127.0.0.1:3000/../../etc/passwd")
            .body(())
            .unwrap();
        let resp = handle_request(req, state).await.unwrap();
        assert_eq!(resp.status(), 403);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let root = temp_root("missing");
        let state = test_state(&root);

        let req = Request::builder().uri("/nope.css").body(()).unwrap();
        let resp = handle_request(req, state).await.unwrap();
        assert_eq!(resp.status(), 404);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Not found: /nope.css");
    }
}
