//! Configuration loader
//!
//! Resolves the listen address and access log format from command-line flags.
//! Every flag falls back to an environment variable derived from its name
//! (uppercased, hyphens replaced with underscores): `--port` reads `PORT`,
//! `--log-format` reads `LOG_FORMAT`. An explicit flag always wins over the
//! environment.

use clap::Parser;
use std::net::SocketAddr;

/// Server configuration, parsed once at startup
#[derive(Parser, Debug, Clone)]
#[command(version, about = "A small web server that serves a bundled single-page application")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env, default_value = "0.0.0.0")]
    pub host: String,

    /// Listen port
    #[arg(long, env, default_value = "24900")]
    pub port: String,

    /// Access log format: combined, common or json
    #[arg(long, env, default_value = "combined")]
    pub log_format: String,
}

impl Config {
    /// Resolve the configured host and port into a socket address.
    ///
    /// The port is kept as a string until this point; an unusable value
    /// surfaces here as a startup failure rather than during flag parsing.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid listen address {}:{}: {e}", self.host, self.port))
    }
}
