//! Request handler module
//!
//! Entry point for HTTP request processing: method validation, static file
//! resolution with SPA fallback, and optional access logging.

pub mod resolve;
pub mod static_files;

pub use resolve::{resolve, Resolution};

use crate::config::SiteState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderName, REFERER, USER_AGENT};
use hyper::http::request::Parts;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
}

/// Main entry point for HTTP request handling
///
/// The request body is never read, so any body type is accepted.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<SiteState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let (parts, _) = req.into_parts();
    let method = &parts.method;

    let response = match *method {
        Method::GET | Method::HEAD => {
            let ctx = RequestContext {
                path: parts.uri.path(),
                is_head: *method == Method::HEAD,
            };
            static_files::serve(&ctx, &state).await
        }
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            http::build_405_response()
        }
    };

    if let Some(format) = state.access_log {
        let entry = access_entry(&parts, &response, peer_addr, started);
        logger::log_access(&entry, format);
    }

    Ok(response)
}

fn access_entry(
    req: &Parts,
    response: &Response<Full<Bytes>>,
    peer_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let header = |name: HeaderName| {
        req.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method.to_string(),
        req.uri.path().to_string(),
    );
    entry.query = req.uri.query().map(ToString::to_string);
    entry.http_version = logger::version_label(req.version).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
    entry.referer = header(REFERER);
    entry.user_agent = header(USER_AGENT);
    entry.request_time_us =
        u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_support::TempTree;
    use http_body_util::BodyExt;
    use hyper::header::CONTENT_TYPE;
    use hyper::StatusCode;

    fn state(tree: &TempTree) -> Arc<SiteState> {
        Arc::new(SiteState::new(&Config::default(), tree.path().to_path_buf()))
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:50000".parse().unwrap()
    }

    async fn call(
        state: &Arc<SiteState>,
        method: Method,
        uri: &str,
    ) -> (StatusCode, String, Bytes) {
        let req = Request::builder().method(method).uri(uri).body(()).unwrap();
        let resp = handle_request(req, Arc::clone(state), peer()).await.unwrap();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, body)
    }

    #[tokio::test]
    async fn test_serves_asset_with_content_type() {
        let tree = TempTree::new("handler-asset");
        tree.write("index.html", "root page");
        tree.write("assets/app.js", "script");
        let state = state(&tree);

        let (status, content_type, body) = call(&state, Method::GET, "/assets/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "text/javascript; charset=utf-8");
        assert_eq!(body, "script");
    }

    #[tokio::test]
    async fn test_client_route_gets_root_index() {
        let tree = TempTree::new("handler-fallback");
        tree.write("index.html", "root page");
        let state = state(&tree);

        let (status, content_type, body) =
            call(&state, Method::GET, "/dashboard/settings?tab=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "text/html; charset=utf-8");
        assert_eq!(body, "root page");
    }

    #[tokio::test]
    async fn test_head_has_no_body() {
        let tree = TempTree::new("handler-head");
        tree.write("index.html", "root page");
        let state = state(&tree);

        let (status, _, body) = call(&state, Method::HEAD, "/anything").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_other_methods_rejected() {
        let tree = TempTree::new("handler-method");
        tree.write("index.html", "root page");
        let state = state(&tree);

        for method in [Method::POST, Method::PUT, Method::DELETE] {
            let (status, _, _) = call(&state, method, "/").await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        }
    }

    #[tokio::test]
    async fn test_missing_root_index_is_server_error() {
        let tree = TempTree::new("handler-no-index");
        tree.write("assets/app.js", "script");
        let state = state(&tree);

        let (status, _, _) = call(&state, Method::GET, "/dashboard").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        // Existing assets are unaffected
        let (status, _, body) = call(&state, Method::GET, "/assets/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "script");
    }

    #[test]
    fn test_access_entry_fields() {
        let req = Request::builder()
            .method(Method::GET)
            .uri("/dashboard?tab=1")
            .header(USER_AGENT, "curl/8.0")
            .body(())
            .unwrap();
        let (parts, ()) = req.into_parts();
        let resp = http::build_file_response(Bytes::from_static(b"root page"), "text/html", false);

        let entry = access_entry(&parts, &resp, peer(), Instant::now());
        assert_eq!(entry.remote_addr, "127.0.0.1");
        assert_eq!(entry.path, "/dashboard");
        assert_eq!(entry.query.as_deref(), Some("tab=1"));
        assert_eq!(entry.status, 200);
        assert_eq!(entry.body_bytes, 9);
        assert_eq!(entry.user_agent.as_deref(), Some("curl/8.0"));
        assert_eq!(entry.referer, None);
    }
}
