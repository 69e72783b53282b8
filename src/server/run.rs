// Accept loop module
// Runs the listener until a termination signal arrives

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::logger;
use crate::server::connection;
use crate::server::signal::{start_signal_handler, SignalHandler};

/// Accept connections until shutdown.
///
/// A failed accept is logged and the loop continues; only a termination
/// signal ends it, after which the listener is dropped and the process
/// exits cleanly.
pub async fn run(listener: TcpListener, config: Arc<Config>) -> std::io::Result<()> {
    let signals = Arc::new(SignalHandler::new());
    start_signal_handler(Arc::clone(&signals));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::accept_connection(stream, peer_addr, Arc::clone(&config));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = signals.shutdown.notified() => {
                logger::log_shutdown();
                break;
            }
        }
    }

    Ok(())
}
