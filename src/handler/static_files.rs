//! Static file serving module
//!
//! Serves files out of the embedded asset tree and reports absent paths to
//! the fallback layer instead of answering them itself.

use crate::assets;
use crate::handler::router::RequestContext;
use crate::handler::ServeError;
use crate::http::response::build_file_response;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Serve a request path from the embedded bundle
pub fn serve(ctx: &RequestContext<'_>) -> Result<Response<Full<Bytes>>, ServeError> {
    match assets::lookup(ctx.path) {
        Some((content, content_type)) => {
            Ok(build_file_response(content, content_type, ctx.is_head))
        }
        None => Err(ServeError::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serves_bundle_file() {
        let ctx = RequestContext {
            path: "/assets/app.css",
            is_head: false,
        };
        let resp = serve(&ctx).unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers().get("Content-Type").unwrap(), "text/css");
    }

    #[test]
    fn test_reports_not_found() {
        let ctx = RequestContext {
            path: "/items/42",
            is_head: false,
        };
        assert_eq!(serve(&ctx).unwrap_err(), ServeError::NotFound);
    }
}
