//! SPA fallback module
//!
//! The bundled application routes on the client side, so paths like
//! `/items/42` have no file in the asset tree. This decorator wraps the
//! static layer and substitutes the root document for the not-found outcome,
//! letting the client router take over; every other outcome passes through.

use crate::assets;
use crate::handler::router::RequestContext;
use crate::handler::{static_files, ServeError};
use crate::http::build_500_response;
use crate::http::response::build_html_response;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Serve a request through the static layer with the fallback rule applied
pub fn serve_with_fallback(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    match static_files::serve(ctx) {
        Ok(response) => response,
        Err(ServeError::NotFound) => fallback_response(assets::root_document(), ctx.is_head),
    }
}

/// Answer a not-found outcome with the root document.
///
/// A bundle without its root document cannot function, so its absence is a
/// request failure, not something to swallow.
fn fallback_response(root: Option<Vec<u8>>, is_head: bool) -> Response<Full<Bytes>> {
    match root {
        Some(content) => build_html_response(content, is_head),
        None => {
            logger::log_error("Root document missing from asset bundle, cannot apply fallback");
            build_500_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_bytes(response: Response<Full<Bytes>>) -> Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_existing_file_passes_through() {
        let ctx = RequestContext {
            path: "/assets/app.js",
            is_head: false,
        };
        let resp = serve_with_fallback(&ctx);
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/javascript"
        );
        assert_eq!(
            body_bytes(resp).await.as_ref(),
            include_bytes!("../../dist/assets/app.js")
        );
    }

    #[tokio::test]
    async fn test_unknown_route_gets_root_document() {
        let ctx = RequestContext {
            path: "/dashboard/settings",
            is_head: false,
        };
        let resp = serve_with_fallback(&ctx);
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            body_bytes(resp).await.as_ref(),
            include_bytes!("../../dist/index.html")
        );
    }

    #[tokio::test]
    async fn test_head_fallback_has_empty_body() {
        let ctx = RequestContext {
            path: "/dashboard/settings",
            is_head: true,
        };
        let resp = serve_with_fallback(&ctx);
        assert_eq!(resp.status(), 200);
        assert!(body_bytes(resp).await.is_empty());
    }

    #[test]
    fn test_missing_root_document_is_a_server_error() {
        let resp = fallback_response(None, false);
        assert_eq!(resp.status(), 500);
    }
}
