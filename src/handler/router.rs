//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, dispatch into
//! the static layer with the fallback rule applied, and access logging.

use crate::config::Config;
use crate::handler::fallback;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
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
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    remote_addr: SocketAddr,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let mut entry = access_entry(&req, remote_addr);

    let response = dispatch(req.method(), req.uri().path());

    entry.status = response.status().as_u16();
    entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    logger::log_access(&entry, &config.log_format);

    Ok(response)
}

/// Route a request by method and path.
///
/// GET and HEAD go through the static layer with the fallback rule; other
/// methods are answered the way a plain static file server would.
fn dispatch(method: &Method, path: &str) -> Response<Full<Bytes>> {
    match method {
        &Method::GET | &Method::HEAD => {
            let ctx = RequestContext {
                path,
                is_head: *method == Method::HEAD,
            };
            fallback::serve_with_fallback(&ctx)
        }
        &Method::OPTIONS => http::build_options_response(),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            http::build_405_response()
        }
    }
}

/// Capture the request-side fields of the access log entry
fn access_entry(req: &Request<hyper::body::Incoming>, remote_addr: SocketAddr) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        remote_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = format!("{:?}", req.version())
        .trim_start_matches("HTTP/")
        .to_string();
    entry.referer = header_value(req, "referer");
    entry.user_agent = header_value(req, "user-agent");
    entry
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
