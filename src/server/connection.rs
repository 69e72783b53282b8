// Connection handling module
// Serves a single accepted TCP connection on its own task

use futures_util::FutureExt;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use crate::config::Config;
use crate::handler;
use crate::http;
use crate::logger;

/// Serve an accepted connection in a spawned task.
///
/// Each request runs under a panic guard: a panicking handler is answered
/// with a 500 and logged, and neither the connection task nor any other
/// request is affected by it. Connection-level I/O errors are logged the
/// same way.
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    config: Arc<Config>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let service = service_fn(move |req| {
            let config = Arc::clone(&config);
            async move {
                let guarded =
                    AssertUnwindSafe(handler::handle_request(req, peer_addr, config)).catch_unwind();
                match guarded.await {
                    Ok(result) => result,
                    Err(_) => {
                        logger::log_error(&format!(
                            "Request handler panicked while serving {peer_addr}"
                        ));
                        Ok(http::build_500_response())
                    }
                }
            }
        });

        let conn = http1::Builder::new()
            .keep_alive(true)
            .serve_connection(io, service);

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
