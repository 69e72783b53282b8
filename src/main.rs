//! ui-server entrypoint.
//!
//! Serves a pre-built single-page-application bundle embedded at compile
//! time from `dist/`, answering unknown paths with the application shell so
//! client-side routes resolve. Keep this file minimal — the logic lives in
//! `config`, `assets`, `handler` and `server`.

use clap::Parser;
use std::sync::Arc;

mod assets;
mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::bind_listener(addr).map_err(|e| {
        logger::log_error(&format!("Failed to bind {addr}: {e}"));
        e
    })?;

    let cfg = Arc::new(cfg);
    logger::log_server_start(&addr, &cfg);

    server::run(listener, cfg).await?;
    Ok(())
}
