//! Static file serving module
//!
//! Reads the resolved file and builds the response.

use crate::config::SiteState;
use crate::handler::resolve::resolve;
use crate::handler::RequestContext;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

/// Serve a request path from the Asset Root, falling back to the root index document
pub async fn serve(ctx: &RequestContext<'_>, site: &SiteState) -> Response<Full<Bytes>> {
    let resolution = resolve(&site.root, ctx.path, &site.index_file);
    if resolution.is_fallback() {
        logger::log_debug(&format!("No file for {}, serving root index", ctx.path));
    }

    let path = resolution.path();
    match fs::read(path).await {
        Ok(content) => http::build_file_response(
            Bytes::from(content),
            http::content_type_for(path),
            ctx.is_head,
        ),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                path.display()
            ));
            http::build_500_response()
        }
    }
}
